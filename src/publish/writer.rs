use super::StatusSink;
use crate::error::Result;
use crate::types::status::{CommentPayload, StatusPayload};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const STATUS_FILE: &str = "status.json";
pub const COMMENT_FILE: &str = "comment.json";

#[derive(Debug, Default)]
pub struct StdoutSink;

impl StatusSink for StdoutSink {
    fn create_status(&mut self, payload: &StatusPayload) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(payload)?);
        Ok(())
    }

    fn create_comment(&mut self, payload: &CommentPayload) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(payload)?);
        Ok(())
    }
}

#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write<T: Serialize>(&mut self, name: &str, payload: &T) -> Result<()> {
        let path = write_json(&self.dir, name, payload)?;
        tracing::info!(path = %path.display(), "wrote payload");
        self.written.push(path);
        Ok(())
    }
}

impl StatusSink for DirectorySink {
    fn create_status(&mut self, payload: &StatusPayload) -> Result<()> {
        self.write(STATUS_FILE, payload)
    }

    fn create_comment(&mut self, payload: &CommentPayload) -> Result<()> {
        self.write(COMMENT_FILE, payload)
    }
}

fn write_json<T: Serialize>(dir: &Path, name: &str, payload: &T) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let out_path = dir.join(name);
    let json = serde_json::to_string_pretty(payload)?;
    fs::write(&out_path, json)?;
    Ok(out_path)
}
