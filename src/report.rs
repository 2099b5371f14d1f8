//! 에러 로그 모듈
//!
//! 누적된 에러를 JSON Lines 형식으로 기록합니다.

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{DecafError, Result};

/// 에러 로그의 한 줄
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorRecord {
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub message: String,
}

impl From<&DecafError> for ErrorRecord {
    fn from(error: &DecafError) -> Self {
        Self {
            kind: error.kind(),
            path: error.path().map(|p| p.display().to_string()),
            message: error.to_string(),
        }
    }
}

/// 에러 목록을 JSON Lines로 직렬화하여 쓰기
pub fn write_error_records<W: Write>(writer: &mut W, errors: &[DecafError]) -> std::io::Result<()> {
    for error in errors {
        let line = serde_json::to_string(&ErrorRecord::from(error))?;
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

/// 에러 로그 파일 작성
///
/// 파일이 이미 있으면 덮어씁니다.
pub fn write_error_log(log_path: &Path, errors: &[DecafError]) -> Result<()> {
    let to_error = |e: std::io::Error| DecafError::LogWrite {
        path: log_path.to_path_buf(),
        reason: e.to_string(),
    };

    let file = File::create(log_path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    write_error_records(&mut writer, errors).map_err(to_error)
}
