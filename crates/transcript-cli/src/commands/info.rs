//! Info command - show session details

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::Path;
use transcript_core::{count_blocks, infer_session, parse_file, LineType};
use transcript_export::dates::format_epoch_millis;

use crate::output::colors;

pub fn run(file: &Path, json: bool) -> Result<()> {
    let messages = parse_file(file)
        .with_context(|| format!("Failed to load transcript {}", file.display()))?;
    let session = infer_session(file, &messages);
    let blocks = count_blocks(&messages);

    let count = |kind: LineType| messages.iter().filter(|m| m.kind == kind).count();
    let user_count = count(LineType::User);
    let assistant_count = count(LineType::Assistant);
    let summary_count = count(LineType::Summary);
    let total_tokens: u64 = messages
        .iter()
        .filter_map(|m| m.message.as_ref()?.usage.as_ref())
        .map(|usage| usage.total())
        .sum();
    let models: BTreeSet<&str> = messages.iter().filter_map(|m| m.model()).collect();

    if json {
        let output = serde_json::json!({
            "session": session,
            "statistics": {
                "user_messages": user_count,
                "assistant_messages": assistant_count,
                "summaries": summary_count,
                "total_tokens": total_tokens,
                "models": models,
                "blocks": {
                    "text": blocks.text,
                    "thinking": blocks.thinking,
                    "tool_use": blocks.tool_use,
                    "tool_result": blocks.tool_result,
                    "unknown": blocks.unknown,
                }
            }
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", colors::header("Session Info"));
    println!();
    println!("  {}: {}", colors::label("Title"), colors::value(&session.display));
    println!("  {}: {}", colors::label("ID"), colors::value(&session.id));
    println!(
        "  {}: {} ({})",
        colors::label("Project"),
        colors::value(&session.project_name),
        session.project
    );
    println!(
        "  {}: {}",
        colors::label("Started"),
        colors::value(&format_epoch_millis(session.timestamp))
    );
    if !models.is_empty() {
        let models: Vec<_> = models.iter().map(|m| colors::colored_model(m)).collect();
        println!("  {}: {}", colors::label("Models"), models.join(", "));
    }

    println!();
    println!("{}", colors::header("Messages"));
    println!();
    for (kind, n) in [
        (LineType::User, user_count),
        (LineType::Assistant, assistant_count),
        (LineType::Summary, summary_count),
    ] {
        println!("  {}: {}", colors::colored_type(kind), colors::format_count(n));
    }
    if total_tokens > 0 {
        println!(
            "  {}: {}",
            colors::label("Total tokens"),
            colors::format_count(total_tokens as usize)
        );
    }

    println!();
    println!("{}", colors::header("Content Blocks"));
    println!();
    for (name, n) in [
        ("text", blocks.text),
        ("thinking", blocks.thinking),
        ("tool_use", blocks.tool_use),
        ("tool_result", blocks.tool_result),
    ] {
        println!("  {}: {}", colors::label(name), colors::format_count(n));
    }
    if blocks.unknown > 0 {
        println!("  {}: {}", colors::label("other"), colors::format_count(blocks.unknown));
    }

    Ok(())
}
