//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use camino::Utf8PathBuf;
use phraselint_core::config::Config;
use phraselint_core::word_lists::builtin_collection;
use phraselint_core::PhraseCollection;

pub mod check;
pub mod dict;
pub mod info;

/// Read a file and validate its size against the configured limit.
///
/// Combines the file-read and size-validation steps every command needs.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Assemble the working dictionary: built-ins (unless disabled), configured
/// dictionary files, then any extra files, deduplicated and sorted.
pub fn load_dictionaries(
    config: &Config,
    extra: &[Utf8PathBuf],
) -> anyhow::Result<PhraseCollection> {
    let mut collection = if config.include_builtin {
        builtin_collection()
    } else {
        PhraseCollection::new()
    };

    for path in config.dictionaries.iter().chain(extra) {
        collection
            .load_file(path, false, true)
            .with_context(|| format!("failed to load dictionary {path}"))?;
    }
    collection.remove_duplicates();
    Ok(collection)
}
