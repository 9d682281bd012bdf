use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionColor {
    #[default]
    Primary,
    Positive,
    Warning,
    Negative,
}
