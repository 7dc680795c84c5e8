//! Shared fixtures for the integration tests.
//!
//! Each test binary compiles this module separately, so some helpers look
//! unused from any single file.

#![allow(dead_code)]

use serde_json::{Map, Value, json};
use sim_host::{FnTool, SyntheticTool, ToolArgs, ToolCategory};

pub fn args(value: Value) -> ToolArgs {
    ToolArgs::from_value(value).expect("tool args must be a JSON object")
}

pub fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("JSON object")
}

/// Text editor in the style of `str_replace_editor`: the `command` argument
/// selects the operation.
pub fn editor_tool() -> impl SyntheticTool {
    FnTool::new("text-editor", |args: &ToolArgs| {
        let command = args
            .get("command")
            .and_then(Value::as_str)
            .unwrap_or("view");
        object(json!({
            "status": "ok",
            "command": command,
            "content": "",
        }))
    })
    .with_category(ToolCategory::FileSystem)
}

pub fn read_file_tool() -> impl SyntheticTool {
    FnTool::new("fs-read_file", |args: &ToolArgs| {
        object(json!({
            "path": args.get("path").cloned().unwrap_or(Value::Null),
            "content": "mock file body",
            "encoding": "utf-8",
        }))
    })
}

pub fn write_file_tool() -> impl SyntheticTool {
    FnTool::new("fs-write_file", |_args: &ToolArgs| {
        object(json!({"success": true, "bytes_written": 0}))
    })
}

pub fn add_item_tool() -> impl SyntheticTool {
    FnTool::new("rpg-add_item", |args: &ToolArgs| {
        object(json!({"added": args.get("item").cloned().unwrap_or(Value::Null)}))
    })
    .with_category(ToolCategory::Gaming)
}

pub fn inventory_tool() -> impl SyntheticTool {
    FnTool::new("rpg-inventory", |_args: &ToolArgs| {
        object(json!({"inventory": ["mock_item"], "content": "mock"}))
    })
    .with_category(ToolCategory::Gaming)
}

pub fn post_tool() -> impl SyntheticTool {
    FnTool::new("social-post_status", |_args: &ToolArgs| {
        object(json!({"post_id": "p-1", "status": "published"}))
    })
    .with_category(ToolCategory::Social)
}

pub fn timeline_tool() -> impl SyntheticTool {
    FnTool::new("social-timeline", |_args: &ToolArgs| {
        object(json!({"content": [], "has_more": false}))
    })
    .with_category(ToolCategory::Social)
}
