/// One country's parsed statistics row.
///
/// Name and code keep the quote characters they carry in the source file;
/// [`Record::display_code`] strips them for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    code: String,
    new_confirmed: u64,
    new_deaths: u64,
    new_recovered: u64,
    total_confirmed: u64,
    total_deaths: u64,
    total_recovered: u64,
}

impl Record {
    /// Build a record from its name, code and the six counters in
    /// `[new_confirmed, new_deaths, new_recovered, total_confirmed,
    /// total_deaths, total_recovered]` order.
    pub fn new(name: &str, code: &str, counters: [u64; 6]) -> Self {
        let [new_confirmed, new_deaths, new_recovered, total_confirmed, total_deaths, total_recovered] =
            counters;
        Self {
            name: name.to_string(),
            code: code.to_string(),
            new_confirmed,
            new_deaths,
            new_recovered,
            total_confirmed,
            total_deaths,
            total_recovered,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Code with one surrounding pair of quotes removed
    pub fn display_code(&self) -> &str {
        let code = self.code.strip_prefix('"').unwrap_or(&self.code);
        code.strip_suffix('"').unwrap_or(code)
    }

    pub fn new_confirmed(&self) -> u64 {
        self.new_confirmed
    }

    pub fn new_deaths(&self) -> u64 {
        self.new_deaths
    }

    pub fn new_recovered(&self) -> u64 {
        self.new_recovered
    }

    pub fn total_confirmed(&self) -> u64 {
        self.total_confirmed
    }

    pub fn total_deaths(&self) -> u64 {
        self.total_deaths
    }

    pub fn total_recovered(&self) -> u64 {
        self.total_recovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_code_strips_quotes() {
        let record = Record::new("\"Korea, South\"", "\"KR\"", [0; 6]);
        assert_eq!(record.code(), "\"KR\"");
        assert_eq!(record.display_code(), "KR");
        assert_eq!(record.name(), "\"Korea, South\"");
    }

    #[test]
    fn test_display_code_without_quotes() {
        let record = Record::new("\"Peru\"", "PE", [0; 6]);
        assert_eq!(record.display_code(), "PE");

        let record = Record::new("\"Peru\"", "\"", [0; 6]);
        assert_eq!(record.display_code(), "");
    }

    #[test]
    fn test_counter_order() {
        let record = Record::new("\"Italy\"", "\"IT\"", [10, 20, 30, 40, 50, 60]);
        assert_eq!(record.new_confirmed(), 10);
        assert_eq!(record.new_deaths(), 20);
        assert_eq!(record.new_recovered(), 30);
        assert_eq!(record.total_confirmed(), 40);
        assert_eq!(record.total_deaths(), 50);
        assert_eq!(record.total_recovered(), 60);
    }
}
