// A mutation argument that must carry at least one non-whitespace character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredText(String);

impl RequiredText{
    pub fn parse(field: &str, value: String) -> Result<RequiredText, String>{
        if value.trim().is_empty(){
            Err(format!("{} must not be empty", field))
        } else {
            Ok(Self(value))
        }
    }

    pub fn inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for RequiredText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequiredText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
