use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fileserver channel as listed by `GET /channels/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub files_sent: u64,
    pub clients_connected: u64,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /channels/send`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendFileRequest {
    pub channel: String,
    pub name: String,
    /// Includes the leading dot (".txt"), empty when the file has none
    pub extension: String,
    pub base64: String,
}

impl SendFileRequest {
    /// Build a request from a file name and its raw content.
    ///
    /// Directory components are dropped and the extension is everything from
    /// the last dot of the base name.
    pub fn from_content(channel: impl Into<String>, file_name: &str, content: &[u8]) -> Self {
        let base = file_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(file_name);
        let (name, extension) = match base.rfind('.') {
            Some(idx) => (&base[..idx], &base[idx..]),
            None => (base, ""),
        };

        Self {
            channel: channel.into(),
            name: name.to_string(),
            extension: extension.to_string(),
            base64: STANDARD.encode(content),
        }
    }
}

/// Reply of `POST /channels/send`, returned with 200 and 400 alike
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendFileResponse {
    pub error: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_content_splits_name_and_extension() {
        let req = SendFileRequest::from_content("docs", "notes/report.final.txt", b"hi");
        assert_eq!(req.channel, "docs");
        assert_eq!(req.name, "report.final");
        assert_eq!(req.extension, ".txt");
        assert_eq!(req.base64, "aGk=");
    }

    #[test]
    fn test_from_content_without_extension() {
        let req = SendFileRequest::from_content("docs", "Makefile", b"");
        assert_eq!(req.name, "Makefile");
        assert_eq!(req.extension, "");
        assert_eq!(req.base64, "");
    }

    #[test]
    fn test_from_content_dotfile() {
        let req = SendFileRequest::from_content("cfg", "C:\\home\\.bashrc", b"x");
        assert_eq!(req.name, "");
        assert_eq!(req.extension, ".bashrc");
    }

    #[test]
    fn test_channel_list_deserialize() {
        let json = r#"[{"name":"docs","files_sent":1,"clients_connected":2,"created_at":"2022-03-14T10:20:30Z"}]"#;
        let channels: Vec<Channel> = serde_json::from_str(json).unwrap();
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].name, "docs");
        assert_eq!(channels[0].clients_connected, 2);
    }
}
