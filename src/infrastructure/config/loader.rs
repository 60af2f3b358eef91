//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::json;

use crate::application::config::{Config, DEFAULT_ACCOUNTS_FILE, DEFAULT_TRANSACTIONS_FILE};
use crate::infrastructure::store::accounts::END_MARKER;

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
pub(crate) fn load_merged_config() -> Result<LoadedConfig> {
    // 낮은 우선순위에서 높은 우선순위 순서로 병합한다.
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();
    let paths = config_paths();

    if let Ok(path) = env::var("XSTREAM_CONFIG")
        && !Path::new(&path).exists()
    {
        bootstrap_template_bundle(Path::new(&path))?;
    }

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        loaded_paths.push(path.to_path_buf());
    }

    if loaded_paths.is_empty() {
        // 최초 실행 경험을 위해 로컬 기본 설정 템플릿을 자동 생성한다.
        let bootstrap_target = default_bootstrap_config_path();
        bootstrap_template_bundle(&bootstrap_target)?;

        let raw = fs::read_to_string(&bootstrap_target).with_context(|| {
            format!(
                "failed to read bootstrapped config at {}",
                bootstrap_target.display()
            )
        })?;
        let parsed: Config = serde_json::from_str(&raw).with_context(|| {
            format!(
                "failed to parse bootstrapped JSON in {}",
                bootstrap_target.display()
            )
        })?;
        merged.merge_from(parsed);
        loaded_paths.push(bootstrap_target);
    }

    tracing::debug!(loaded = loaded_paths.len(), "config merged");
    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 기본 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from("/etc/xstream/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("xstream").join("config.json"));
    }

    paths.push(PathBuf::from(".xstream/config.json"));

    if let Ok(path) = env::var("XSTREAM_CONFIG") {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

fn default_bootstrap_config_path() -> PathBuf {
    if let Ok(path) = env::var("XSTREAM_CONFIG") {
        return PathBuf::from(path);
    }
    PathBuf::from(".xstream/config.json")
}

/// 설정 템플릿과 함께 시드 계정 파일까지 만들어 준다.
/// 계정 파일이 없으면 로그인할 수 없는 터미널이 되기 때문이다.
fn bootstrap_template_bundle(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let accounts_path = Path::new(DEFAULT_ACCOUNTS_FILE);
    if !accounts_path.exists() {
        fs::write(accounts_path, seed_accounts_template()).with_context(|| {
            format!(
                "failed to create accounts template at {}",
                accounts_path.display()
            )
        })?;
    }

    let template = json!({
        "defaults": {
            "accounts_path": DEFAULT_ACCOUNTS_FILE,
            "transactions_path": DEFAULT_TRANSACTIONS_FILE
        }
    });

    let rendered = serde_json::to_string_pretty(&template)?;
    fs::write(config_path, format!("{rendered}\n"))
        .with_context(|| format!("failed to create config template at {}", config_path.display()))
}

fn seed_accounts_template() -> String {
    format!("admin admin 0\n{END_MARKER}\n")
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}
