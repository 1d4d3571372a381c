/// A single logical content line: `NAME;PARAM=VALUE:value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLine<'a> {
    raw: &'a str,
}

impl<'a> ContentLine<'a> {
    pub fn new(raw: &'a str) -> Self {
        ContentLine { raw }
    }

    /// Property name: everything before the first `;` or `:`.
    pub fn name(&self) -> &'a str {
        let end = self
            .raw
            .find(|c: char| c == ';' || c == ':')
            .unwrap_or(self.raw.len());
        &self.raw[..end]
    }

    /// Property names are compared ignoring ASCII case.
    pub fn is_property(&self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name)
    }

    /// Split at the first `:` into key part (name plus parameters) and value.
    pub fn split(&self) -> Option<(&'a str, &'a str)> {
        self.raw.split_once(':')
    }

    pub fn value(&self) -> Option<&'a str> {
        self.split().map(|(_, value)| value)
    }

    pub fn is_event_begin(&self) -> bool {
        self.raw.starts_with("BEGIN:VEVENT")
    }

    pub fn is_event_end(&self) -> bool {
        self.raw.starts_with("END:VEVENT")
    }
}
