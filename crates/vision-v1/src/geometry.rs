//! Image geometry: vertices, bounding polygons and 3D positions.

use vision_proto_runtime::{message, FieldDescriptor, Kind, MessageDescriptor};

pub(crate) static VERTEX: MessageDescriptor = MessageDescriptor {
    full_name: "google.cloud.vision.v1.Vertex",
    fields: &[
        FieldDescriptor::singular(1, "x", Kind::Int32),
        FieldDescriptor::singular(2, "y", Kind::Int32),
    ],
    oneofs: &[],
};

pub(crate) static NORMALIZED_VERTEX: MessageDescriptor = MessageDescriptor {
    full_name: "google.cloud.vision.v1.NormalizedVertex",
    fields: &[
        FieldDescriptor::singular(1, "x", Kind::Float),
        FieldDescriptor::singular(2, "y", Kind::Float),
    ],
    oneofs: &[],
};

pub(crate) static BOUNDING_POLY: MessageDescriptor = MessageDescriptor {
    full_name: "google.cloud.vision.v1.BoundingPoly",
    fields: &[
        FieldDescriptor::repeated(1, "vertices", Kind::Message(Vertex::descriptor)),
        FieldDescriptor::repeated(
            2,
            "normalized_vertices",
            Kind::Message(NormalizedVertex::descriptor),
        ),
    ],
    oneofs: &[],
};

pub(crate) static POSITION: MessageDescriptor = MessageDescriptor {
    full_name: "google.cloud.vision.v1.Position",
    fields: &[
        FieldDescriptor::singular(1, "x", Kind::Float),
        FieldDescriptor::singular(2, "y", Kind::Float),
        FieldDescriptor::singular(3, "z", Kind::Float),
    ],
    oneofs: &[],
};

message! {
    /// A vertex in pixel coordinates of the image.
    pub struct Vertex => VERTEX
}

impl Vertex {
    scalar_field!(1, x, set_x, i32);
    scalar_field!(2, y, set_y, i32);

    pub fn at(x: i32, y: i32) -> Self {
        let mut v = Self::new();
        v.set_x(x).set_y(y);
        v
    }
}

message! {
    /// A vertex in coordinates relative to the image size, from 0 to 1.
    pub struct NormalizedVertex => NORMALIZED_VERTEX
}

impl NormalizedVertex {
    scalar_field!(1, x, set_x, f32);
    scalar_field!(2, y, set_y, f32);

    pub fn at(x: f32, y: f32) -> Self {
        let mut v = Self::new();
        v.set_x(x).set_y(y);
        v
    }
}

message! {
    /// A polygon around a detected region.
    pub struct BoundingPoly => BOUNDING_POLY
}

impl BoundingPoly {
    repeated_message_field!(1, vertices, set_vertices, add_vertices, Vertex);
    repeated_message_field!(
        2,
        normalized_vertices,
        set_normalized_vertices,
        add_normalized_vertices,
        NormalizedVertex
    );
}

message! {
    /// A 3D position; units match the image's coordinate space.
    pub struct Position => POSITION
}

impl Position {
    scalar_field!(1, x, set_x, f32);
    scalar_field!(2, y, set_y, f32);
    scalar_field!(3, z, set_z, f32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use vision_proto_runtime::Message;

    #[test]
    fn vertex_encoding() {
        assert_eq!(Vertex::at(1, 2).encode_to_vec(), vec![0x08, 0x01, 0x10, 0x02]);
        assert!(Vertex::at(0, 0).encode_to_vec().is_empty());
        let negative = Vertex::at(-1, 0).encode_to_vec();
        assert_eq!(negative.len(), 11);
        assert_eq!(Vertex::decode(&negative).unwrap().x(), -1);
    }

    #[test]
    fn polygon_keeps_vertex_order() {
        let mut poly = BoundingPoly::new();
        poly.add_vertices(Vertex::at(0, 0), None)
            .add_vertices(Vertex::at(10, 10), None)
            .add_vertices(Vertex::at(10, 0), Some(1))
            .add_normalized_vertices(NormalizedVertex::at(0.5, 0.25), None);
        let decoded = BoundingPoly::decode(&poly.encode_to_vec()).unwrap();
        let xs: Vec<i32> = decoded.vertices().iter().map(Vertex::x).collect();
        assert_eq!(xs, vec![0, 10, 10]);
        assert_eq!(decoded.vertices()[1].y(), 0);
        assert_eq!(decoded.normalized_vertices()[0].y(), 0.25);
        assert_eq!(decoded, poly);
    }

    #[test]
    fn polygon_plain_object() {
        let mut poly = BoundingPoly::new();
        poly.add_vertices(Vertex::at(3, 4), None);
        assert_eq!(
            poly.to_plain_object(false),
            serde_json::json!({
                "verticesList": [{"x": 3, "y": 4}],
                "normalizedVerticesList": [],
            })
        );
    }

    #[test]
    fn position_round_trip() {
        let mut p = Position::new();
        p.set_x(1.5).set_z(-2.0);
        let decoded = Position::decode(&p.encode_to_vec()).unwrap();
        assert_eq!((decoded.x(), decoded.y(), decoded.z()), (1.5, 0.0, -2.0));
    }
}
