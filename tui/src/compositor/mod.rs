//! Layered Compositor
//!
//! Manages z-ordered layers for rendering. Each layer has its own buffer
//! and can be positioned, resized, and reordered independently. The page
//! body sits at the back; the navbar, dropdown overlay and status bar are
//! stacked above it.

mod layer;

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

pub use layer::Layer;

/// Unique identifier for a layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(u32);

/// The compositor manages all layers and composites them together
#[derive(Debug)]
pub struct Compositor {
    layers: HashMap<LayerId, Layer>,
    /// Back to front; equal z-indices keep creation order
    render_order: Vec<LayerId>,
    next_id: u32,
    output: Buffer,
    area: Rect,
}

impl Compositor {
    /// Create a new compositor for the given area
    pub fn new(area: Rect) -> Self {
        Self {
            layers: HashMap::new(),
            render_order: Vec::new(),
            next_id: 0,
            output: Buffer::empty(area),
            area,
        }
    }

    /// Create a new layer and return its ID
    pub fn create_layer(&mut self, bounds: Rect, z_index: i32) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;

        self.layers.insert(id, Layer::new(id, bounds, z_index));
        self.update_render_order();
        id
    }

    /// Get mutable access to a layer's buffer for rendering
    pub fn layer_buffer_mut(&mut self, id: LayerId) -> Option<&mut Buffer> {
        self.layers.get_mut(&id).map(|l| &mut l.buffer)
    }

    /// Set a layer's z-index
    pub fn set_z_index(&mut self, id: LayerId, z_index: i32) {
        if let Some(layer) = self.layers.get_mut(&id) {
            if layer.z_index != z_index {
                layer.z_index = z_index;
                self.update_render_order();
            }
        }
    }

    /// Mark a layer as covering everything behind it
    pub fn set_opaque(&mut self, id: LayerId, opaque: bool) {
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.opaque = opaque;
        }
    }

    /// Move a layer to a new position
    pub fn move_layer(&mut self, id: LayerId, x: u16, y: u16) {
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.bounds.x = x;
            layer.bounds.y = y;
        }
    }

    /// Resize a layer (its buffer is cleared)
    pub fn resize_layer(&mut self, id: LayerId, width: u16, height: u16) {
        if let Some(layer) = self.layers.get_mut(&id) {
            if layer.bounds.width != width || layer.bounds.height != height {
                layer.resize(width, height);
            }
        }
    }

    /// Set layer visibility
    pub fn set_visible(&mut self, id: LayerId, visible: bool) {
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.visible = visible;
        }
    }

    /// Resize the entire compositor
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.output = Buffer::empty(area);
    }

    /// Composite all visible layers into the output buffer
    pub fn composite(&mut self) -> &Buffer {
        self.output.reset();

        for id in &self.render_order {
            if let Some(layer) = self.layers.get(id) {
                if layer.visible {
                    Self::blit_layer(&mut self.output, self.area, layer);
                }
            }
        }

        &self.output
    }

    fn blit_layer(output: &mut Buffer, area: Rect, layer: &Layer) {
        let lb = layer.bounds;

        for ly in 0..lb.height {
            for lx in 0..lb.width {
                let dst_x = lb.x.saturating_add(lx);
                let dst_y = lb.y.saturating_add(ly);
                if dst_x >= area.width || dst_y >= area.height {
                    continue;
                }

                let src_idx = layer.buffer.index_of(lx, ly);
                let Some(src_cell) = layer.buffer.content.get(src_idx) else {
                    continue;
                };

                // Transparent layers leave blank cells showing what is behind
                if layer.opaque || src_cell.symbol() != " " {
                    let dst_idx = output.index_of(dst_x, dst_y);
                    if let Some(dst) = output.content.get_mut(dst_idx) {
                        *dst = src_cell.clone();
                    }
                }
            }
        }
    }

    /// Find the topmost visible layer at a screen position
    pub fn layer_at(&self, x: u16, y: u16) -> Option<LayerId> {
        self.render_order.iter().rev().copied().find(|id| {
            self.layers
                .get(id)
                .is_some_and(|layer| layer.visible && layer.contains(x, y))
        })
    }

    fn update_render_order(&mut self) {
        self.render_order = self.layers.keys().copied().collect();
        self.render_order
            .sort_by_key(|id| (self.layers.get(id).map_or(0, |l| l.z_index), *id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};

    fn symbol_at(buf: &Buffer, x: u16, y: u16) -> &str {
        buf[(x, y)].symbol()
    }

    #[test]
    fn test_higher_z_draws_on_top() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 4, 1));
        let back = compositor.create_layer(Rect::new(0, 0, 4, 1), 0);
        let front = compositor.create_layer(Rect::new(1, 0, 2, 1), 10);

        compositor
            .layer_buffer_mut(back)
            .unwrap()
            .set_string(0, 0, "aaaa", Style::default());
        compositor
            .layer_buffer_mut(front)
            .unwrap()
            .set_string(0, 0, "b", Style::default().fg(Color::Yellow));

        let out = compositor.composite();
        assert_eq!(symbol_at(out, 0, 0), "a");
        assert_eq!(symbol_at(out, 1, 0), "b");
        // Transparent blank cell keeps the back layer
        assert_eq!(symbol_at(out, 2, 0), "a");
    }

    #[test]
    fn test_opaque_layer_covers_blanks() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 3, 1));
        let back = compositor.create_layer(Rect::new(0, 0, 3, 1), 0);
        let overlay = compositor.create_layer(Rect::new(0, 0, 3, 1), 5);
        compositor.set_opaque(overlay, true);

        compositor
            .layer_buffer_mut(back)
            .unwrap()
            .set_string(0, 0, "xyz", Style::default());

        let out = compositor.composite();
        assert_eq!(symbol_at(out, 1, 0), " ");
    }

    #[test]
    fn test_hidden_layers_skipped_and_hit_testing() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 10, 5));
        let page = compositor.create_layer(Rect::new(0, 0, 10, 5), 0);
        let menu = compositor.create_layer(Rect::new(2, 1, 4, 2), 20);

        assert_eq!(compositor.layer_at(3, 1), Some(menu));
        assert_eq!(compositor.layer_at(0, 0), Some(page));

        compositor.set_visible(menu, false);
        assert_eq!(compositor.layer_at(3, 1), Some(page));

        compositor.set_z_index(page, 30);
        compositor.set_visible(menu, true);
        assert_eq!(compositor.layer_at(3, 1), Some(page));
    }

    #[test]
    fn test_layers_clipped_to_area() {
        let mut compositor = Compositor::new(Rect::new(0, 0, 2, 1));
        let wide = compositor.create_layer(Rect::new(1, 0, 5, 1), 0);
        compositor
            .layer_buffer_mut(wide)
            .unwrap()
            .set_string(0, 0, "hello", Style::default());

        let out = compositor.composite();
        assert_eq!(symbol_at(out, 1, 0), "h");
        assert_eq!(out.area.width, 2);
    }
}
