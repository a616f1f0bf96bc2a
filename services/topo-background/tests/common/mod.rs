//! Shared helpers for service integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use renderer::{ContourPath, Surface};
use topo_common::{Rgb, TopoError, Viewport};

/// What a [`RecordingSurface`] has seen, shared with the test body.
#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub view_boxes: Vec<Viewport>,
    pub colors: Vec<Rgb>,
    pub clears: usize,
    pub paths: usize,
    pub presents: usize,
}

/// Surface that records calls instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub log: Arc<Mutex<SurfaceLog>>,
    pub fail_present: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_present: true,
            ..Self::default()
        }
    }

    pub fn view_boxes(&self) -> Vec<Viewport> {
        self.log.lock().unwrap().view_boxes.clone()
    }

    pub fn colors(&self) -> Vec<Rgb> {
        self.log.lock().unwrap().colors.clone()
    }
}

impl Surface for RecordingSurface {
    fn set_view_box(&mut self, viewport: Viewport) {
        self.log.lock().unwrap().view_boxes.push(viewport);
    }

    fn clear(&mut self) {
        self.log.lock().unwrap().clears += 1;
    }

    fn draw_path(&mut self, _path: ContourPath) {
        self.log.lock().unwrap().paths += 1;
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.log.lock().unwrap().colors.push(color);
    }

    fn present(&mut self) -> Result<(), TopoError> {
        self.log.lock().unwrap().presents += 1;
        if self.fail_present {
            return Err(TopoError::IoError("disk full".to_string()));
        }
        Ok(())
    }
}
