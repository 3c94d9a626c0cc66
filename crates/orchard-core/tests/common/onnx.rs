//! Hand-encoded ONNX graphs small enough to build inside a test.
//!
//! The only graph is `scores = ReduceMean(input, axes, keepdims=0)`. Reducing
//! over the two spatial axes leaves one score per color channel, so a solid
//! image produces predictable outputs.

const WIRE_VARINT: u64 = 0;
const WIRE_LEN: u64 = 2;

const ONNX_FLOAT: i64 = 1;
const ATTR_INT: i64 = 2;
const ATTR_INTS: i64 = 7;

fn varint(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.push((value as u8) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

fn int_field(buf: &mut Vec<u8>, field: u64, value: i64) {
    varint(buf, (field << 3) | WIRE_VARINT);
    varint(buf, value as u64);
}

fn bytes_field(buf: &mut Vec<u8>, field: u64, bytes: &[u8]) {
    varint(buf, (field << 3) | WIRE_LEN);
    varint(buf, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

/// `ValueInfoProto` for a float tensor of unspecified shape.
fn float_value_info(name: &str) -> Vec<u8> {
    let mut tensor = Vec::new();
    int_field(&mut tensor, 1, ONNX_FLOAT);

    let mut ty = Vec::new();
    bytes_field(&mut ty, 1, &tensor);

    let mut info = Vec::new();
    bytes_field(&mut info, 1, name.as_bytes());
    bytes_field(&mut info, 2, &ty);
    info
}

fn ints_attribute(name: &str, values: &[i64]) -> Vec<u8> {
    let mut attr = Vec::new();
    bytes_field(&mut attr, 1, name.as_bytes());
    for &v in values {
        int_field(&mut attr, 8, v);
    }
    int_field(&mut attr, 20, ATTR_INTS);
    attr
}

fn int_attribute(name: &str, value: i64) -> Vec<u8> {
    let mut attr = Vec::new();
    bytes_field(&mut attr, 1, name.as_bytes());
    int_field(&mut attr, 3, value);
    int_field(&mut attr, 20, ATTR_INT);
    attr
}

/// Serialized ONNX model averaging `input` over `axes` (opset 13).
///
/// Use `[1, 2]` for NHWC input and `[2, 3]` for NCHW input.
pub fn channel_mean_model(axes: [i64; 2]) -> Vec<u8> {
    let mut node = Vec::new();
    bytes_field(&mut node, 1, b"input");
    bytes_field(&mut node, 2, b"scores");
    bytes_field(&mut node, 3, b"channel_mean");
    bytes_field(&mut node, 4, b"ReduceMean");
    bytes_field(&mut node, 5, &ints_attribute("axes", &axes));
    bytes_field(&mut node, 5, &int_attribute("keepdims", 0));

    let mut graph = Vec::new();
    bytes_field(&mut graph, 1, &node);
    bytes_field(&mut graph, 2, b"channel_mean");
    bytes_field(&mut graph, 11, &float_value_info("input"));
    bytes_field(&mut graph, 12, &float_value_info("scores"));

    let mut opset = Vec::new();
    bytes_field(&mut opset, 1, b"");
    int_field(&mut opset, 2, 13);

    let mut model = Vec::new();
    int_field(&mut model, 1, 7);
    bytes_field(&mut model, 2, b"orchard-tests");
    bytes_field(&mut model, 7, &graph);
    bytes_field(&mut model, 8, &opset);
    model
}

pub const NHWC_AXES: [i64; 2] = [1, 2];
pub const NCHW_AXES: [i64; 2] = [2, 3];
