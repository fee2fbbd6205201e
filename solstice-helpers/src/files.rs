use futures::future::try_join_all;
use globset::{GlobBuilder, GlobMatcher};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

const GLOB_META: [char; 4] = ['*', '?', '[', '{'];

/// Удаляет все файлы, подходящие под glob-шаблон. Возвращает число удалённых.
/// Ошибка разбора шаблона возвращается до любого удаления.
pub async fn glob_delete(pattern: &str) -> Result<usize> {
    let owned = pattern.to_string();
    let files = tokio::task::spawn_blocking(move || resolve_glob(&owned)).await??;

    try_join_all(files.iter().map(|p| tokio::fs::remove_file(p))).await?;
    debug!(pattern, count = files.len(), "glob_delete done");
    Ok(files.len())
}

/// Раскрывает шаблон в список файлов (каталоги не возвращаются).
/// `*` не пересекает '/', для вложенности нужен `**`.
/// Имена на '.' ниже корня обхода подходят, только если сегмент шаблона сам начинается с '.'.
pub fn resolve_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()?
        .compile_matcher();
    let dots = dot_matchers(pattern)?;

    let (root, depth) = walk_root(pattern);
    let relative = root.as_os_str().is_empty();
    let root = if relative { PathBuf::from(".") } else { root };
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    let walker = WalkDir::new(&root)
        .max_depth(depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || visible(e, &dots));
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        // при обходе от "." пути приходят как "./x", шаблон их так не пишет
        let candidate: &Path = if relative {
            entry.path().strip_prefix(".").unwrap_or(entry.path())
        } else {
            entry.path()
        };
        if matcher.is_match(candidate) {
            out.push(entry.into_path());
        }
    }
    Ok(out)
}

/// Сегменты после литерального префикса, явно начинающиеся с '.'
fn dot_matchers(pattern: &str) -> Result<Vec<GlobMatcher>> {
    pattern
        .split('/')
        .skip_while(|c| !c.contains(GLOB_META))
        .filter(|c| c.starts_with('.') && *c != "." && *c != "..")
        .map(|c| -> Result<GlobMatcher> {
            Ok(GlobBuilder::new(c).literal_separator(true).build()?.compile_matcher())
        })
        .collect()
}

fn visible(entry: &DirEntry, dots: &[GlobMatcher]) -> bool {
    match entry.file_name().to_str() {
        Some(name) if name.starts_with('.') => dots.iter().any(|m| m.is_match(name)),
        _ => true,
    }
}

/// Литеральный префикс шаблона (откуда обходить) и глубина обхода
fn walk_root(pattern: &str) -> (PathBuf, usize) {
    let components: Vec<&str> = pattern.split('/').collect();
    let literal = components
        .iter()
        .take_while(|c| !c.contains(GLOB_META))
        .count();

    let mut root = components[..literal].join("/");
    if root.is_empty() && pattern.starts_with('/') {
        root = "/".to_string();
    }

    let depth = if pattern.contains("**") {
        usize::MAX
    } else {
        components.len() - literal
    };
    (PathBuf::from(root), depth)
}
