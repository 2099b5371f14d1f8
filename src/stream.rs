//! 스트림 모드 모듈
//!
//! 입력 스트림 전체를 한 번에 읽어 한 번만 변환하고, 결과 전체를 출력
//! 스트림에 씁니다. 파일 시스템은 사용하지 않습니다.

use std::io::{Read, Write};

use tracing::debug;

use crate::config::RunConfiguration;
use crate::engine::{ConvertError, ConvertRequest, Converter};
use crate::error::{DecafError, FatalError};

/// 입력 스트림을 변환하여 출력 스트림에 쓰기
///
/// 변환 실패는 파일 모드와 같은 치명적 에러로 돌려줍니다.
pub fn run_with_stream<R, W, C>(
    mut input: R,
    mut output: W,
    config: &RunConfiguration,
    converter: &C,
) -> Result<(), FatalError>
where
    R: Read,
    W: Write,
    C: Converter + ?Sized,
{
    let mut source = String::new();
    input
        .read_to_string(&mut source)
        .map_err(|source| FatalError::Stream(DecafError::Stream { source }))?;
    debug!(bytes = source.len(), "입력 스트림 읽기 완료");

    let request = ConvertRequest {
        filename: None,
        options: &config.engine,
    };

    let code = converter
        .convert(&source, &request)
        .map_err(|e| match e {
            ConvertError::Patch(error) => FatalError::Diagnostic { path: None, error },
            ConvertError::Internal(source) => FatalError::Engine { path: None, source },
        })?;

    output
        .write_all(code.as_bytes())
        .and_then(|()| output.flush())
        .map_err(|source| FatalError::Stream(DecafError::Stream { source }))
}
