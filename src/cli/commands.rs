use crate::autofill::orchestrator::AutofillEngine;
use crate::cli::config::AppConfig;
use crate::dom::document::Document;
use crate::error::AutofillError;
use crate::extract::cache::ExtractCache;
use crate::extract::extractor::extract;
use crate::matching::matcher::match_fields;
use crate::matching::profile::ProfileData;
use crate::trace::event::DiagLevel;
use crate::trace::sink::DiagSink;

// ============================================================================
// fill subcommand
// ============================================================================

pub fn cmd_fill(
    snapshot_path: &str,
    profile_path: Option<&str>,
    output: Option<&str>,
    print_events: bool,
    sink: DiagSink,
    config: &AppConfig,
) -> Result<(), AutofillError> {
    let mut doc = load_snapshot(snapshot_path)?;
    let profile = resolve_profile(profile_path, config)?;

    let mut engine = AutofillEngine::new(sink);
    let summary = engine.run(&mut doc, &profile);

    eprintln!("{}", summary.message);

    if print_events {
        for event in doc.events() {
            println!("{} -> node {}", event.name, event.target.0);
        }
    }

    let mutated = doc.to_snapshot();
    let json = serde_json::to_string_pretty(&mutated).map_err(|e| AutofillError::SnapshotParse {
        context: "serializing mutated snapshot".into(),
        source: e,
    })?;
    match output {
        Some(path) => std::fs::write(path, json).map_err(|e| AutofillError::Io {
            path: path.to_string(),
            source: e,
        })?,
        None => println!("{}", json),
    }

    Ok(())
}

// ============================================================================
// inspect subcommand
// ============================================================================

/// Detect fields and show their best matches without touching the document.
pub fn cmd_inspect(
    snapshot_path: &str,
    profile_path: Option<&str>,
    sink: DiagSink,
    config: &AppConfig,
) -> Result<(), AutofillError> {
    let doc = load_snapshot(snapshot_path)?;
    let mut cache = ExtractCache::new();

    let fields = extract(&doc, &mut cache, &sink);
    println!("{} fillable fields detected", fields.len());
    for field in &fields {
        println!(
            "  {:?} '{}' — search text: \"{}\"",
            field.kind,
            field.display_name(),
            field.search_text
        );
    }

    let profile = match profile_path.or(config.profile.as_deref()) {
        Some(path) => load_profile(path)?,
        None => return Ok(()),
    };

    let matches = match_fields(&fields, &profile, &sink);
    println!("{} fields matched", matches.len());
    for m in &matches {
        println!(
            "  '{}' <- {} (confidence {:.2}{})",
            fields[m.field].display_name(),
            m.source_key,
            m.confidence,
            if m.is_custom { ", custom" } else { "" }
        );
    }

    Ok(())
}

// ============================================================================
// Loading helpers
// ============================================================================

fn load_snapshot(path: &str) -> Result<Document, AutofillError> {
    let content = std::fs::read_to_string(path).map_err(|e| AutofillError::Io {
        path: path.to_string(),
        source: e,
    })?;
    Document::from_snapshot_json(&content)
}

/// Profile files are YAML or JSON, decided by extension.
pub fn load_profile(path: &str) -> Result<ProfileData, AutofillError> {
    let content = std::fs::read_to_string(path).map_err(|e| AutofillError::Io {
        path: path.to_string(),
        source: e,
    })?;

    let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "yaml" | "yml" => {
            serde_yaml::from_str(&content).map_err(|e| AutofillError::ProfileParse {
                path: path.to_string(),
                message: e.to_string(),
            })
        }
        "json" => serde_json::from_str(&content).map_err(|e| AutofillError::ProfileParse {
            path: path.to_string(),
            message: e.to_string(),
        }),
        other => Err(AutofillError::UnsupportedFormat(other.to_string())),
    }
}

fn resolve_profile(
    profile_path: Option<&str>,
    config: &AppConfig,
) -> Result<ProfileData, AutofillError> {
    match profile_path.or(config.profile.as_deref()) {
        Some(path) => load_profile(path),
        None => Ok(ProfileData::default()),
    }
}

/// Build the diagnostics sink from resolved CLI/config values.
pub fn build_sink(level: DiagLevel, trace_path: Option<&str>) -> DiagSink {
    match trace_path {
        Some(path) => DiagSink::file(path, level),
        None => DiagSink::stderr(level),
    }
}
