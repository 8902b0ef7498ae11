//! Turning a decoded document into a batch of updates.

use courier_core::{config::DecodeConfig, Node};
use courier_types::Update;
use serde_json::Value;
use tracing::{debug, warn};

/// Updates hydrated from one document.
#[derive(Debug, Default)]
pub struct Batch {
    pub updates: Vec<Update>,
    /// Entries dropped because they were not objects.
    pub skipped: usize,
}

/// Accepts a single update, a list of updates, or (when enabled) the
/// `{"ok": ..., "result": [...]}` wrapper returned by `getUpdates`.
pub fn decode_batch(doc: &Value, cfg: &DecodeConfig) -> anyhow::Result<Batch> {
    let entries = entries(doc, cfg)?;
    let mut batch = Batch::default();

    for (index, entry) in entries.iter().enumerate() {
        match Update::from_node(entry) {
            Ok(update) => batch.updates.push(update),
            Err(e) if cfg.skip_undecodable => {
                warn!("skipping entry {index}: {e}");
                batch.skipped += 1;
            }
            Err(e) => anyhow::bail!("entry {index}: {e}"),
        }
    }

    debug!(
        "decoded {} updates ({} skipped)",
        batch.updates.len(),
        batch.skipped
    );
    Ok(batch)
}

fn entries<'a>(doc: &'a Value, cfg: &DecodeConfig) -> anyhow::Result<&'a [Value]> {
    if cfg.unwrap_response && doc.has("ok") && doc.has("result") {
        if doc.get("ok").and_then(Value::as_bool) != Some(true) {
            anyhow::bail!(
                "API response reports failure: {}",
                doc.get("description")
                    .and_then(Value::as_str)
                    .unwrap_or("no description")
            );
        }
        let result = &doc["result"];
        return Ok(match result.elements() {
            Some(items) => items,
            None => std::slice::from_ref(result),
        });
    }

    Ok(match doc.elements() {
        Some(items) => items,
        None => std::slice::from_ref(doc),
    })
}

/// One line per update: id, populated kinds, chat, sender, text.
pub fn summarize(update: &Update) -> String {
    let kinds: Vec<&str> = update.kinds().iter().map(|k| k.as_str()).collect();
    let mut line = format!("update {} [{}]", update.update_id, kinds.join(","));

    if let Some(msg) = update.any_message() {
        line.push_str(&format!(" chat={}", msg.chat.id));
        if let Some(from) = &msg.from {
            line.push_str(&format!(" from={}", from.public_name().trim_end()));
        }
        if !msg.text.is_empty() {
            line.push_str(&format!(" text={:?}", msg.text));
        }
    } else if let Some(cb) = &update.callback_query {
        if let Some(from) = &cb.from {
            line.push_str(&format!(" from={}", from.public_name().trim_end()));
        }
        line.push_str(&format!(" data={:?}", cb.data));
    } else if let Some(q) = &update.inline_query {
        line.push_str(&format!(" query={:?}", q.query));
    } else if let Some(change) = update
        .my_chat_member
        .as_ref()
        .or(update.chat_member.as_ref())
    {
        line.push_str(&format!(
            " chat={} {} -> {}",
            change.chat.id, change.old_chat_member.status, change.new_chat_member.status
        ));
    }

    line
}
