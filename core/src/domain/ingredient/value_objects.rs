#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectIngredientsInput {
    pub image_data: Vec<u8>,
    pub mime_type: String,
    pub existing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeIngredientsInput {
    pub existing: Vec<String>,
    pub detected: Vec<String>,
}
