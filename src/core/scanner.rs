//! # Component Scanner
//!
//! 점(`.`)으로 구분된 패키지 이름을 소스 루트 아래의 디렉터리로 해석하고,
//! 재귀적으로 순회하며 모든 소스 유닛의 정규화된 후보 이름을 수집합니다.
//!
//! ```text
//! src/app/controller/demo_action.rs   →  app.controller.demo_action
//! src/app/service/mod.rs              →  app.service
//! src/app/service/demo_service_impl.rs →  app.service.demo_service_impl
//! ```
//!
//! 결과 순서는 파일시스템 열거 순서를 그대로 따르며 플랫폼 간에 보장되지 않습니다.
//! 호출자는 순서에 의존하면 안 됩니다.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::errors::{ContextError, ContextResult};

/// 소스 유닛 확장자
pub const UNIT_EXTENSION: &str = ".rs";

/// 모듈 디렉터리 자체를 나타내는 파일 이름 (확장자 제외)
const MODULE_INDEX: &str = "mod";

pub struct ComponentScanner {
    source_root: PathBuf,
}

impl ComponentScanner {
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self { source_root: source_root.into() }
    }

    /// 패키지 이름에 대응하는 디렉터리 경로
    ///
    /// 빈 패키지 이름은 소스 루트 자체를 의미합니다.
    pub fn package_dir(&self, package: &str) -> PathBuf {
        package
            .split('.')
            .filter(|segment| !segment.is_empty())
            .fold(self.source_root.clone(), |dir, segment| dir.join(segment))
    }

    /// 패키지를 재귀적으로 스캔하여 후보 이름 목록을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `ContextError::ScanRootNotFound` - 패키지가 존재하는 디렉터리로 해석되지 않음
    /// * `ContextError::ScanIo` - 디렉터리 엔트리 읽기 실패
    pub fn scan(&self, package: &str) -> ContextResult<Vec<String>> {
        let root = self.package_dir(package);
        if !root.is_dir() {
            return Err(ContextError::ScanRootNotFound {
                package: package.to_string(),
                path: root,
            });
        }

        let mut candidates = Vec::new();
        self.scan_dir(package, &root, &mut candidates)?;
        debug!("Scanned {} candidate(s) under {}", candidates.len(), root.display());
        Ok(candidates)
    }

    fn scan_dir(&self, namespace: &str, dir: &Path, out: &mut Vec<String>) -> ContextResult<()> {
        let entries = fs::read_dir(dir).map_err(|source| ContextError::ScanIo {
            path: dir.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| ContextError::ScanIo {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            let file_name = entry.file_name().to_string_lossy().into_owned();

            if file_name.starts_with('.') {
                continue;
            }

            if path.is_dir() {
                self.scan_dir(&join_namespace(namespace, &file_name), &path, out)?;
            } else if let Some(stem) = file_name.strip_suffix(UNIT_EXTENSION) {
                let candidate = if stem == MODULE_INDEX {
                    namespace.to_string()
                } else {
                    join_namespace(namespace, stem)
                };
                out.push(candidate);
            }
        }

        Ok(())
    }
}

fn join_namespace(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", namespace, name)
    }
}
