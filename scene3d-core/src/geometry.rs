/// Geometry primitives for 3D rendering
use nalgebra::{Point3, Vector3};

use crate::m4::{self, Mat4};

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32, nx: f32, ny: f32, nz: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
            normal: Vector3::new(nx, ny, nz),
        }
    }

    /// Position moved by `matrix` as a point (w = 1). Normals are kept.
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        let p = self.position;
        let [x, y, z, _] = m4::transform_vector(matrix, [p.x, p.y, p.z, 1.0]);
        Self {
            position: Point3::new(x, y, z),
            normal: self.normal,
        }
    }

    /// Normal packed into an RGB byte triple
    pub fn color(&self) -> [u8; 3] {
        let n = self.normal;
        [normal_to_byte(n.x), normal_to_byte(n.y), normal_to_byte(n.z)]
    }
}

// Maps a unit normal component from [-1, 1] onto [0, 255].
fn normal_to_byte(component: f32) -> u8 {
    ((component * 0.5 + 0.5) * 255.0) as u8
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Calculate the face normal from the triangle's vertices
    pub fn calculate_normal(&self) -> Vector3<f32> {
        let v0 = self.vertices[0].position;
        let v1 = self.vertices[1].position;
        let v2 = self.vertices[2].position;

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        edge1.cross(&edge2).normalize()
    }

    /// Same triangle with every vertex normal set to the face normal
    pub fn flat_shaded(mut self) -> Self {
        let normal = self.calculate_normal();
        for vertex in &mut self.vertices {
            vertex.normal = normal;
        }
        self
    }

    /// Average vertex color of the face
    pub fn color(&self) -> [u8; 3] {
        let mut sum = [0u32; 3];
        for vertex in &self.vertices {
            for (acc, channel) in sum.iter_mut().zip(vertex.color()) {
                *acc += channel as u32;
            }
        }
        sum.map(|channel| (channel / 3) as u8)
    }
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn vertex_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Orientation applied to the model before upload: turned to face the
    /// default camera and scaled up six times.
    pub fn model_orientation() -> Mat4 {
        m4::scale(&m4::y_rotation(std::f32::consts::PI), 6.0, 6.0, 6.0)
    }

    /// Copy of the mesh with `matrix` baked into every position
    pub fn baked(&self, matrix: &Mat4) -> Self {
        let triangles = self
            .triangles
            .iter()
            .map(|t| {
                let [a, b, c] = &t.vertices;
                Triangle::new(a.transformed(matrix), b.transformed(matrix), c.transformed(matrix))
            })
            .collect();
        Self { triangles }
    }

    /// Flat `x, y, z` positions, three per vertex
    pub fn positions(&self) -> Vec<f32> {
        self.triangles
            .iter()
            .flat_map(|t| t.vertices.iter())
            .flat_map(|v| [v.position.x, v.position.y, v.position.z])
            .collect()
    }

    /// Flat RGB bytes derived from the normals, three per vertex
    pub fn vertex_colors(&self) -> Vec<u8> {
        self.triangles
            .iter()
            .flat_map(|t| t.vertices.iter())
            .flat_map(|v| v.color())
            .collect()
    }

    /// Create a simple cube mesh for testing
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        let mut mesh = Self::with_capacity(12);

        // Four corners per face, counter-clockwise seen from outside
        let faces: [[[f32; 3]; 4]; 6] = [
            [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
            [[1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0]],
            [[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]],
            [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
            [[1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]],
            [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
        ];

        for corners in faces {
            let v = |i: usize| {
                let [x, y, z] = corners[i];
                Vertex::new(x * half, y * half, z * half, 0.0, 0.0, 0.0)
            };
            mesh.add_triangle(Triangle::new(v(0), v(1), v(2)).flat_shaded());
            mesh.add_triangle(Triangle::new(v(0), v(2), v(3)).flat_shaded());
        }

        mesh
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
