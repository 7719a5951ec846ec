use super::policy::NormalizerKind;

/// Why a normalizer declined a candidate.
///
/// A rejection is an expected outcome: the dispatcher moves on to the next
/// normalizer in the chain.
/// 拒绝是预期结果：分发器继续尝试下一个规范化器。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("not a recognized bitmap")]
    NotAnImage,

    #[error("{0} images are stored verbatim, not re-encoded")]
    ExcludedImageFormat(String),

    #[error("bitmap could not be decoded: {0}")]
    UndecodableImage(String),

    #[error("candidate carries no text")]
    NotText,

    #[error("content is not valid UTF-8")]
    NotUtf8,

    #[error("not valid JSON: {0}")]
    InvalidJson(String),

    #[error("JSON value is empty or falsy")]
    EmptyJson,

    #[error("not CSV: {0}")]
    CsvStructure(&'static str),

    #[error("no SQL keyword found")]
    NoSqlKeyword,

    #[error("text is blank after trimming")]
    BlankText,

    #[error("text is shorter than {min} characters")]
    TextTooShort { min: usize },

    #[error("{0} normalizer does not apply to this candidate")]
    NotApplicable(NormalizerKind),
}

/// Result type of a normalizer attempt.
///
/// `Rejected` means "this candidate is not format F"; `Failed` is a genuine
/// defect (e.g. encoding a decoded bitmap failed) and must propagate.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}
