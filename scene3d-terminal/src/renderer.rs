/// ASCII rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use scene3d_core::projection::project_with;
use scene3d_core::{Mat4, Mesh, Triangle};
use std::io::Write;

/// Character luminosity ramp for shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &['.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// ASCII renderer that converts 3D meshes to terminal characters
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
    color_buffer: Vec<[u8; 3]>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
            color_buffer: vec![[0; 3]; size],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.char_buffer.fill(' ');
        self.color_buffer.fill([0; 3]);
    }

    pub fn char_at(&self, x: usize, y: usize) -> char {
        self.char_buffer[y * self.width + x]
    }

    /// Draw `mesh` through a full model-view-projection matrix
    pub fn render_mesh(&mut self, mesh: &Mesh, mvp: &Mat4) {
        for triangle in &mesh.triangles {
            self.render_triangle(triangle, mvp);
        }
    }

    fn render_triangle(&mut self, triangle: &Triangle, mvp: &Mat4) {
        // Project vertices to screen space
        let mut screen_coords = [(0.0, 0.0, 0.0); 3];
        for (coord, vertex) in screen_coords.iter_mut().zip(&triangle.vertices) {
            let p = vertex.position;
            match project_with(mvp, [p.x, p.y, p.z], self.width as u32, self.height as u32) {
                Some(projected) => *coord = projected,
                None => return, // Triangle is clipped
            }
        }

        // Shade from the per-vertex colors
        let color = triangle.color();
        let luminance = color.iter().map(|&c| c as f32).sum::<f32>() / (3.0 * 255.0);
        let char_index = (luminance * (LUMINOSITY_RAMP.len() - 1) as f32) as usize;
        let character = LUMINOSITY_RAMP[char_index.min(LUMINOSITY_RAMP.len() - 1)];

        // Rasterize triangle using scanline algorithm
        self.rasterize_triangle(&screen_coords, character, color);
    }

    fn rasterize_triangle(
        &mut self,
        coords: &[(f32, f32, f32); 3],
        character: char,
        color: [u8; 3],
    ) {
        let [v0, v1, v2] = *coords;

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i32;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i32;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                let Some((w0, w1, w2)) =
                    barycentric((v0.0, v0.1), (v1.0, v1.1), (v2.0, v2.1), (px, py))
                else {
                    continue;
                };
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                // Interpolate depth
                let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;

                let idx = y as usize * self.width + x as usize;
                if depth < self.depth_buffer[idx] {
                    self.depth_buffer[idx] = depth;
                    self.char_buffer[idx] = character;
                    self.color_buffer[idx] = color;
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let [r, g, b] = self.color_buffer[idx];
                writer.queue(SetForegroundColor(Color::Rgb { r, g, b }))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene3d_core::{m4, Camera, Vertex};

    // Screen-filling triangle in NDC, at the given depth, facing +Z
    fn ndc_triangle(z: f32) -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_triangle(Triangle::new(
            Vertex::new(-1.0, -1.0, z, 0.0, 0.0, 1.0),
            Vertex::new(1.0, -1.0, z, 0.0, 0.0, 1.0),
            Vertex::new(-1.0, 1.0, z, 0.0, 0.0, 1.0),
        ));
        mesh
    }

    #[test]
    fn test_rasterizes_projected_triangle() {
        let mut renderer = AsciiRenderer::new(20, 10);
        renderer.render_mesh(&ndc_triangle(0.0), &m4::IDENTITY);
        // Lower-left corner is covered, upper-right is not.
        assert_ne!(renderer.char_at(1, 8), ' ');
        assert_eq!(renderer.char_at(18, 1), ' ');
    }

    #[test]
    fn test_depth_test_keeps_nearest() {
        let mut renderer = AsciiRenderer::new(20, 10);
        let mut far = ndc_triangle(0.5);
        let away = Vertex::new(0.0, 0.0, 0.0, 0.0, 0.0, -1.0).normal;
        for v in &mut far.triangles[0].vertices {
            v.normal = away;
        }
        renderer.render_mesh(&ndc_triangle(-0.5), &m4::IDENTITY);
        let near_char = renderer.char_at(1, 8);
        renderer.render_mesh(&far, &m4::IDENTITY);
        assert_eq!(renderer.char_at(1, 8), near_char);
        assert_eq!(near_char, '*');
    }

    #[test]
    fn test_clear_resets_buffers() {
        let mut renderer = AsciiRenderer::new(8, 4);
        renderer.render_mesh(&ndc_triangle(0.0), &m4::IDENTITY);
        renderer.clear();
        assert!((0..4).all(|y| (0..8).all(|x| renderer.char_at(x, y) == ' ')));
    }

    #[test]
    fn test_clipped_triangle_is_skipped() {
        let mut renderer = AsciiRenderer::new(8, 4);
        renderer.render_mesh(&ndc_triangle(0.0), &m4::translation(5.0, 0.0, 0.0));
        assert!((0..4).all(|y| (0..8).all(|x| renderer.char_at(x, y) == ' ')));
    }

    #[test]
    fn test_triangle_behind_camera_is_skipped() {
        let mut renderer = AsciiRenderer::new(8, 4);
        let camera = Camera {
            position: [0.0, 0.0, 10.0],
            target: [0.0, 0.0, 0.0],
            ..Camera::default()
        };
        let behind = m4::translation(0.0, 0.0, 20.0);
        let mvp = m4::multiply(&camera.view_projection(), &behind);
        renderer.render_mesh(&ndc_triangle(0.0), &mvp);
        assert!((0..4).all(|y| (0..8).all(|x| renderer.char_at(x, y) == ' ')));
    }

    #[test]
    fn test_triangle_past_far_plane_is_skipped() {
        let mut renderer = AsciiRenderer::new(8, 4);
        renderer.render_mesh(&ndc_triangle(1.5), &m4::IDENTITY);
        assert!((0..4).all(|y| (0..8).all(|x| renderer.char_at(x, y) == ' ')));
    }

    #[test]
    fn test_degenerate_triangle_has_no_barycentric() {
        assert!(barycentric((0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.5, 0.5)).is_none());
    }

    #[test]
    fn test_draw_writes_every_cell() {
        let renderer = AsciiRenderer::new(3, 2);
        let mut out = Vec::new();
        renderer.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\r\n"));
    }
}
