/// A file part received in a multipart product form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    /// File name as sent by the client, only its extension is ever used
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Product form fields as received from the client.
///
/// Text values are trimmed but otherwise untouched, `None` means the field was not sent.
/// File parts without a file name or without content are dropped while parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductSubmission {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub font_family: Option<String>,
    pub image_url: Option<String>,
    pub image: Option<UploadedFile>,
    pub font_file: Option<UploadedFile>,
}
