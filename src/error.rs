use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("choices for `{enum_name}` produce the member `{member}` more than once")]
    DuplicateEnumMember { enum_name: String, member: String },
    #[error("`{value}` in `{enum_name}` is too large to spell as a member name")]
    UnspellableNumber { enum_name: String, value: String },
}
