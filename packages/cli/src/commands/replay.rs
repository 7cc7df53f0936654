use anyhow::Result;
use chrono::Utc;
use clap::Args;
use colored::{ColoredString, Colorize};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;
use tandem_workspace::{
    Design, EditOrigin, EditorKey, Generated, ProjectRecord, SyncStatus, TemplateRecord, Viewport,
    Workspace, WorkspaceEvent,
};

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Session script (a JSON array of steps)
    pub script: PathBuf,

    /// Seed the workspace with this code file before the first step
    #[arg(short, long)]
    pub code: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// One scripted session event. The tag names mirror the workspace funnels;
/// time only advances through `tick`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum SessionStep {
    Generate {
        code: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        category: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
    LoadProject {
        code: String,
        title: String,
        #[serde(default)]
        thumbnail: String,
        #[serde(default)]
        description: String,
    },
    LoadTemplate {
        code: String,
        title: String,
    },
    External {
        code: String,
    },
    Click {
        path: String,
    },
    ShiftClick {
        path: String,
    },
    Input {
        path: String,
        text: String,
    },
    Commit {
        path: String,
    },
    Cancel {
        path: String,
    },
    Style {
        path: String,
        property: String,
        value: String,
    },
    TypeCode {
        text: String,
    },
    Save,
    Undo,
    Redo,
    Key {
        key: char,
        ctrl: bool,
        #[serde(default)]
        shift: bool,
    },
    SetCursor {
        offset: usize,
    },
    SetViewport {
        viewport: Viewport,
    },
    Tick {
        ms: u64,
    },
    Refresh,
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("cannot read script {path}: {source}")]
    Script {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid session script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("step {index}: unrecognized key chord ({key:?}, ctrl={ctrl})")]
    UnknownChord { index: usize, key: char, ctrl: bool },
}

pub fn replay(args: ReplayArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.script).map_err(|source| ReplayError::Script {
        path: args.script.display().to_string(),
        source,
    })?;
    let steps: Vec<SessionStep> = serde_json::from_str(&raw).map_err(ReplayError::Parse)?;

    let json_mode = args.format == "json";
    let mut workspace = Workspace::new();
    let mut now = Instant::now();
    let mut log: Vec<WorkspaceEvent> = Vec::new();

    if !json_mode {
        println!("🎬 {} Tandem Replay", "Starting".green().bold());
        println!("   Script: {} ({} steps)", args.script.display(), steps.len());
        println!();
    }

    if let Some(path) = &args.code {
        let code = fs::read_to_string(path)?;
        workspace.adopt_external(code, now);
        flush_events(&mut workspace, &mut log, json_mode);
    }

    for (index, step) in steps.into_iter().enumerate() {
        if !json_mode {
            println!("   {} {}", format!("[{:>3}]", index).dimmed(), describe(&step));
        }

        match step {
            SessionStep::Generate {
                code,
                title,
                category,
                description,
            } => {
                let design = Design {
                    category: category.unwrap_or_default(),
                    title: title.unwrap_or_else(|| "Generated design".to_string()),
                    description: description.unwrap_or_default(),
                    preview: String::new(),
                    generated_at: Utc::now(),
                };
                workspace.adopt_generated(Generated { code, design }, now);
            }
            SessionStep::LoadProject {
                code,
                title,
                thumbnail,
                description,
            } => {
                workspace.load_project(
                    ProjectRecord {
                        code,
                        title,
                        thumbnail,
                        description,
                    },
                    now,
                );
            }
            SessionStep::LoadTemplate { code, title } => {
                workspace.load_template(TemplateRecord { code, title }, now);
            }
            SessionStep::External { code } => workspace.adopt_external(code, now),
            SessionStep::Click { path } => workspace.preview_click(&path),
            SessionStep::ShiftClick { path } => workspace.preview_shift_click(&path),
            SessionStep::Input { path, text } => workspace.preview_input(&path, &text),
            SessionStep::Commit { path } => workspace.preview_commit(&path, now),
            SessionStep::Cancel { path } => workspace.preview_cancel(&path),
            SessionStep::Style {
                path,
                property,
                value,
            } => workspace.preview_submit_style(&path, &property, &value, now),
            SessionStep::TypeCode { text } => workspace.editor_type(&text, now),
            SessionStep::Save => workspace.editor_save(now),
            SessionStep::Undo => workspace.editor_undo(now),
            SessionStep::Redo => workspace.editor_redo(now),
            SessionStep::Key { key, ctrl, shift } => {
                let chord = EditorKey::from_chord(key, ctrl, shift)
                    .ok_or(ReplayError::UnknownChord { index, key, ctrl })?;
                workspace.editor_key(chord, now);
            }
            SessionStep::SetCursor { offset } => workspace.editor_set_cursor(offset),
            SessionStep::SetViewport { viewport } => workspace.set_viewport(viewport),
            SessionStep::Tick { ms } => {
                now += Duration::from_millis(ms);
                workspace.tick(now);
            }
            SessionStep::Refresh => workspace.refresh(),
        }

        flush_events(&mut workspace, &mut log, json_mode);
    }

    if json_mode {
        let json = serde_json::to_string_pretty(&serde_json::json!({
            "events": log,
            "status": workspace.status(),
            "kind": workspace.preview().current_kind(),
            "code": workspace.code(),
        }))?;
        println!("{}", json);
        return Ok(());
    }

    println!();
    println!("✨ {} Session replayed", "Done".green().bold());
    println!("   Events: {}", log.len());
    println!("   Status: {}", status_label(workspace.status()));
    if let Some(kind) = workspace.preview().current_kind() {
        println!("   Kind: {}", kind);
    }
    println!("   Code: {} chars", workspace.code().chars().count());
    println!();
    println!("{}", workspace.code());

    Ok(())
}

fn flush_events(workspace: &mut Workspace, log: &mut Vec<WorkspaceEvent>, json_mode: bool) {
    for event in workspace.drain_events() {
        if !json_mode {
            match &event {
                WorkspaceEvent::CodeChanged { code, origin } => println!(
                    "        {} code changed ({} chars, {})",
                    "✓".green(),
                    code.chars().count(),
                    origin_label(*origin)
                ),
                WorkspaceEvent::RenderFailed { message } => {
                    println!("        {} render failed: {}", "✗".red(), message)
                }
                WorkspaceEvent::StatusChanged { status } => {
                    println!("        {} status → {}", "•".blue(), status)
                }
            }
        }
        log.push(event);
    }
}

fn describe(step: &SessionStep) -> String {
    match step {
        SessionStep::Generate { .. } => "generate".to_string(),
        SessionStep::LoadProject { title, .. } => format!("load project {:?}", title),
        SessionStep::LoadTemplate { title, .. } => format!("load template {:?}", title),
        SessionStep::External { code } => format!("external code ({} chars)", code.chars().count()),
        SessionStep::Click { path } => format!("click {}", path),
        SessionStep::ShiftClick { path } => format!("shift-click {}", path),
        SessionStep::Input { path, text } => format!("input {} = {:?}", path, text),
        SessionStep::Commit { path } => format!("commit {}", path),
        SessionStep::Cancel { path } => format!("cancel {}", path),
        SessionStep::Style {
            path,
            property,
            value,
        } => format!("style {} {}: {:?}", path, property, value),
        SessionStep::TypeCode { text } => format!("type {} chars", text.chars().count()),
        SessionStep::Save => "save".to_string(),
        SessionStep::Undo => "undo".to_string(),
        SessionStep::Redo => "redo".to_string(),
        SessionStep::Key { key, ctrl, shift } => {
            format!("key {:?} ctrl={} shift={}", key, ctrl, shift)
        }
        SessionStep::SetCursor { offset } => format!("cursor {}", offset),
        SessionStep::SetViewport { viewport } => format!("viewport {:?}", viewport),
        SessionStep::Tick { ms } => format!("tick +{}ms", ms),
        SessionStep::Refresh => "refresh".to_string(),
    }
}

fn origin_label(origin: EditOrigin) -> &'static str {
    match origin {
        EditOrigin::Preview => "preview",
        EditOrigin::Editor => "editor",
        EditOrigin::External => "external",
    }
}

fn status_label(status: SyncStatus) -> ColoredString {
    match status {
        SyncStatus::Synced => "synced".green(),
        SyncStatus::Syncing => "syncing".yellow(),
        SyncStatus::Error => "error".red(),
    }
}
