// Copyright (c) jast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Textual representation: `Kind(field=value, ...)`.

use std::fmt::{self, Write};

use super::{Field, FieldValue, Scalar};

pub(crate) fn write_node(
    f: &mut fmt::Formatter<'_>,
    kind: &str,
    fields: &[Field<'_>],
) -> fmt::Result {
    f.write_str(kind)?;
    f.write_char('(')?;
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}={}", field.name, field.value)?;
    }
    f.write_char(')')
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) | Scalar::Label(Some(text)) => write!(f, "{text:?}"),
            Scalar::Label(None) => f.write_str("None"),
            Scalar::Count(count) => write!(f, "{count}"),
            Scalar::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            FieldValue::Child(node) | FieldValue::OptionalChild(Some(node)) => {
                fmt::Display::fmt(node, f)
            }
            FieldValue::OptionalChild(None) => f.write_str("None"),
            FieldValue::Children(nodes) => {
                f.write_char('[')?;
                for (index, node) in nodes.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(node, f)?;
                }
                f.write_char(']')
            }
        }
    }
}
