/// Kind of analysis requested from the AI analyze endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisType {
    #[default]
    Summary,
    Sentiment,
    KeyPoints,
}

impl AnalysisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Summary => "summary",
            AnalysisType::Sentiment => "sentiment",
            AnalysisType::KeyPoints => "keyPoints",
        }
    }

    /// Unknown or missing values fall back to a summary.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("sentiment") => AnalysisType::Sentiment,
            Some("keyPoints") => AnalysisType::KeyPoints,
            _ => AnalysisType::Summary,
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            AnalysisType::Summary => "Provide a concise summary of the following content:",
            AnalysisType::Sentiment => {
                "Analyze the sentiment of the following text (positive, negative, or neutral):"
            }
            AnalysisType::KeyPoints => "Extract the key points from the following content:",
        }
    }
}
