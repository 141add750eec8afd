use crate::{JsonNumber, Value};

/// A type without a dedicated [`Value`] variant.
#[derive(Debug)]
#[allow(dead_code)]
pub struct Unknown {
    pub foo: String,
}

// Helper function to capture an `Unknown` as an opaque value
pub fn unknown() -> Value {
    Value::opaque(&Unknown {
        foo: "bar".to_string(),
    })
}

// Every kind of value that holds the number 8
pub fn eight_inputs() -> Vec<Value> {
    vec![
        Value::from(8_i8),
        Value::from(8_i16),
        Value::from(8_i32),
        Value::from(8_i64),
        Value::from(8_isize),
        Value::from(8_u8),
        Value::from(8_u16),
        Value::from(8_u32),
        Value::from(8_u64),
        Value::from(8_usize),
        Value::from(8.0_f32),
        Value::from(8.0_f64),
        Value::from("8"),
        Value::from(JsonNumber::new("8")),
        Value::reference(8_i32),
        Value::reference(Value::reference("8")),
    ]
}

// Every signed kind of value that holds the number -8
pub fn negative_eight_inputs() -> Vec<Value> {
    vec![
        Value::from(-8_i8),
        Value::from(-8_i16),
        Value::from(-8_i32),
        Value::from(-8_i64),
        Value::from(-8_isize),
        Value::from(-8.0_f32),
        Value::from(-8.0_f64),
        Value::from("-8"),
        Value::from(JsonNumber::new("-8")),
        Value::reference(Value::reference(-8_i64)),
    ]
}
