use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(String),

    #[error("Invalid question data: {0}")]
    DataFormat(String),

    #[error("No questions found for the selected quiz configuration.")]
    EmptySelection,

    #[error("Invalid quiz descriptor: {0}")]
    InvalidDescriptor(String),
}

impl From<std::io::Error> for QuizError {
    fn from(e: std::io::Error) -> Self {
        QuizError::Load(e.to_string())
    }
}

impl QuizError {
    /// Headline shown above the error description on the error screen
    pub fn title(&self) -> &'static str {
        match self {
            QuizError::Load(_) => "Failed to Load Questions Data",
            QuizError::DataFormat(_) => "Data Error: File is Empty or Invalid",
            QuizError::EmptySelection => "No Questions Available",
            QuizError::InvalidDescriptor(_) => "Invalid Quiz Link",
        }
    }
}
