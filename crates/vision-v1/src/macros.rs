//! Accessor generators used by the message bindings.
//!
//! Each macro expands to getter/setter methods inside an `impl` block of a
//! type declared with `vision_proto_runtime::message!`.

macro_rules! string_field {
    ($number:expr, $get:ident, $set:ident) => {
        pub fn $get(&self) -> &str {
            self.inner.get_str($number)
        }

        pub fn $set(&mut self, value: impl Into<String>) -> &mut Self {
            self.inner
                .put_field($number, ::vision_proto_runtime::FieldValue::String(value.into()));
            self
        }
    };
}

macro_rules! bytes_field {
    ($number:expr, $get:ident, $set:ident) => {
        pub fn $get(&self) -> &[u8] {
            self.inner.get_bytes($number)
        }

        pub fn $set(&mut self, value: impl Into<Vec<u8>>) -> &mut Self {
            self.inner
                .put_field($number, ::vision_proto_runtime::FieldValue::Bytes(value.into()));
            self
        }
    };
}

macro_rules! scalar_field {
    ($number:expr, $get:ident, $set:ident, $ty:ty) => {
        pub fn $get(&self) -> $ty {
            self.inner
                .get_field_with_default($number, <$ty as Default>::default())
        }

        pub fn $set(&mut self, value: $ty) -> &mut Self {
            self.inner
                .put_field($number, ::vision_proto_runtime::FieldValue::from(value));
            self
        }
    };
}

macro_rules! enum_field {
    ($number:expr, $get:ident, $set:ident, $ty:ty) => {
        /// Unrecognized numbers read as the zero value.
        pub fn $get(&self) -> $ty {
            <$ty>::from_i32(self.inner.get_enum($number)).unwrap_or_default()
        }

        pub fn $set(&mut self, value: $ty) -> &mut Self {
            self.inner
                .put_field($number, ::vision_proto_runtime::FieldValue::Enum(value as i32));
            self
        }
    };
}

macro_rules! message_field {
    ($number:expr, $get:ident, $set:ident, $has:ident, $clear:ident, $ty:ty) => {
        /// `None` when the field is absent.
        pub fn $get(&self) -> Option<$ty> {
            self.inner.get_wrapper_field($number)
        }

        pub fn $set(&mut self, value: $ty) -> &mut Self {
            self.inner.set_wrapper_field($number, Some(value));
            self
        }

        pub fn $has(&self) -> bool {
            self.inner.has_field($number)
        }

        pub fn $clear(&mut self) -> &mut Self {
            self.inner.clear_field($number);
            self
        }
    };
}

macro_rules! repeated_string_field {
    ($number:expr, $get:ident, $set:ident, $add:ident) => {
        pub fn $get(&self) -> Vec<String> {
            self.inner.get_repeated_scalar($number)
        }

        pub fn $set(&mut self, values: Vec<String>) -> &mut Self {
            self.inner.put_repeated_field(
                $number,
                values
                    .into_iter()
                    .map(::vision_proto_runtime::FieldValue::String)
                    .collect(),
            );
            self
        }

        pub fn $add(&mut self, value: impl Into<String>) -> &mut Self {
            self.inner.push_repeated_field(
                $number,
                ::vision_proto_runtime::FieldValue::String(value.into()),
                None,
            );
            self
        }
    };
}

macro_rules! repeated_message_field {
    ($number:expr, $get:ident, $set:ident, $add:ident, $ty:ty) => {
        pub fn $get(&self) -> Vec<$ty> {
            self.inner.get_repeated_wrapper_field($number)
        }

        pub fn $set(&mut self, values: Vec<$ty>) -> &mut Self {
            self.inner.set_repeated_wrapper_field($number, values);
            self
        }

        /// Appends, or inserts at `index` when given.
        pub fn $add(&mut self, value: $ty, index: Option<usize>) -> &mut Self {
            self.inner.add_to_repeated_wrapper_field($number, value, index);
            self
        }
    };
}
