/// ## Output capture
///
/// Every `print` appends one row. Rows accumulate across runs until
/// `clear` is called.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Printable {
    logs: Vec<Vec<String>>,
}

impl Printable {
    pub fn new() -> Printable {
        Printable::default()
    }

    pub fn log<S: AsRef<str>>(&mut self, fragments: &[S]) {
        self.logs
            .push(fragments.iter().map(|s| s.as_ref().to_string()).collect());
    }

    pub fn logs(&self) -> &[Vec<String>] {
        &self.logs
    }

    /// Each row with its fragments joined by a space.
    pub fn rows(&self) -> Vec<String> {
        self.logs.iter().map(|row| row.join(" ")).collect()
    }

    pub fn clear(&mut self) {
        self.logs.clear();
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}

impl std::fmt::Display for Printable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.rows().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_order() {
        let mut p = Printable::new();
        p.log(&["1"]);
        p.log(&["a", "b"]);
        assert_eq!(p.logs(), &[vec!["1".to_string()], vec!["a".to_string(), "b".to_string()]]);
        assert_eq!(p.rows(), vec!["1", "a b"]);
        assert_eq!(p.to_string(), "1\na b");
    }

    #[test]
    fn test_clear_twice() {
        let mut p = Printable::new();
        p.log(&["ff"]);
        p.clear();
        assert!(p.is_empty());
        p.clear();
        assert!(p.is_empty());
        assert_eq!(p, Printable::default());
    }
}
