// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Declarative response layouts and the generic assembler that walks them.
//!
//! A [`Schema`] lists the fixed fields of an endpoint in slot order, split into
//! segments so that a new revision can insert a field by adding one segment,
//! plus an optional tail group that repeats until the response ends.

use super::error::{DecodeError, SchemaError};
use super::primitives::{
    decode_bech32_address, decode_boolean, decode_hex_integer, decode_utf8, slot_hex, to_u64,
};
use crate::types::{Bech32Address, QueryResult, U256};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Address,
    Text,
    Integer,
    Flag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Contract function the layout belongs to.
    pub endpoint: &'static str,
    /// Fixed prefix, read segment by segment.
    pub segments: &'static [&'static [FieldSpec]],
    /// Group repeated over the remaining slots. Empty means no tail.
    pub tail: &'static [FieldSpec],
}

impl Schema {
    pub fn fixed_fields(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        self.segments.iter().flat_map(|segment| segment.iter())
    }

    pub fn fixed_len(&self) -> usize {
        self.segments.iter().map(|segment| segment.len()).sum()
    }

    pub fn stride(&self) -> usize {
        self.tail.len()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fixed_fields().any(|f| f.name == name) || self.tail.iter().any(|f| f.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Address(Bech32Address),
    Text(String),
    Integer(U256),
    Flag(bool),
}

impl FieldValue {
    fn decode(kind: FieldKind, slot: &str, hrp: &str) -> Result<Self, DecodeError> {
        Ok(match kind {
            FieldKind::Address => FieldValue::Address(decode_bech32_address(slot, hrp)?),
            FieldKind::Text => FieldValue::Text(decode_utf8(slot)?),
            FieldKind::Integer => FieldValue::Integer(decode_hex_integer(slot)?),
            FieldKind::Flag => FieldValue::Flag(decode_boolean(slot)?),
        })
    }
}

/// Named values of one decoded record (or one tail group).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFields {
    endpoint: &'static str,
    values: Vec<(FieldSpec, usize, FieldValue)>,
}

impl DecodedFields {
    fn new(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            values: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn lookup(&self, name: &'static str, kind: FieldKind) -> Option<(usize, &FieldValue)> {
        self.values
            .iter()
            .find(|(spec, _, _)| spec.name == name && spec.kind == kind)
            .map(|(_, index, value)| (*index, value))
    }

    fn missing(&self, name: &'static str, expected: FieldKind) -> SchemaError {
        SchemaError::MissingField {
            endpoint: self.endpoint,
            field: name,
            expected,
        }
    }

    pub fn address(&self, name: &'static str) -> Result<Bech32Address, SchemaError> {
        match self.lookup(name, FieldKind::Address) {
            Some((_, FieldValue::Address(address))) => Ok(address.clone()),
            _ => Err(self.missing(name, FieldKind::Address)),
        }
    }

    pub fn text(&self, name: &'static str) -> Result<String, SchemaError> {
        match self.lookup(name, FieldKind::Text) {
            Some((_, FieldValue::Text(text))) => Ok(text.clone()),
            _ => Err(self.missing(name, FieldKind::Text)),
        }
    }

    pub fn flag(&self, name: &'static str) -> Result<bool, SchemaError> {
        match self.lookup(name, FieldKind::Flag) {
            Some((_, FieldValue::Flag(flag))) => Ok(*flag),
            _ => Err(self.missing(name, FieldKind::Flag)),
        }
    }

    pub fn integer(&self, name: &'static str) -> Result<U256, SchemaError> {
        self.opt_integer(name)?
            .ok_or_else(|| self.missing(name, FieldKind::Integer))
    }

    /// Integer that only some schema revisions carry.
    pub fn opt_integer(&self, name: &'static str) -> Result<Option<U256>, SchemaError> {
        match self.lookup(name, FieldKind::Integer) {
            Some((_, FieldValue::Integer(value))) => Ok(Some(*value)),
            _ => Ok(None),
        }
    }

    /// Integer narrowed to `u64`, for counters and supplies.
    pub fn count(&self, name: &'static str) -> Result<u64, SchemaError> {
        let Some((index, FieldValue::Integer(value))) = self.lookup(name, FieldKind::Integer)
        else {
            return Err(self.missing(name, FieldKind::Integer));
        };
        to_u64(*value).map_err(|source| SchemaError::Field {
            endpoint: self.endpoint,
            field: name,
            index,
            source,
        })
    }
}

/// Output of [`assemble`]: the fixed prefix and one entry per tail group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub fixed: DecodedFields,
    pub groups: Vec<DecodedFields>,
}

/// Decode `result` against `schema`.
///
/// Fails on the first problem: a missing fixed slot, a tail that does not
/// split into whole groups, or a slot that does not decode as its kind.
/// Schemas without a tail ignore surplus slots.
pub fn assemble(schema: &Schema, result: &QueryResult, hrp: &str) -> Result<Decoded, SchemaError> {
    let slots = &result.return_data;
    let fixed_len = schema.fixed_len();

    if slots.len() < fixed_len {
        let field = schema
            .fixed_fields()
            .nth(slots.len())
            .map(|f| f.name)
            .unwrap_or_default();
        return Err(SchemaError::TooFewSlots {
            endpoint: schema.endpoint,
            expected: fixed_len,
            actual: slots.len(),
            field,
        });
    }

    let remaining = slots.len() - fixed_len;
    let stride = schema.stride();
    if stride == 0 {
        if remaining > 0 {
            tracing::debug!(
                endpoint = schema.endpoint,
                surplus = remaining,
                "Ignoring surplus slots after fixed fields"
            );
        }
    } else if remaining % stride != 0 {
        return Err(SchemaError::UnalignedTail {
            endpoint: schema.endpoint,
            remaining,
            stride,
        });
    }

    let mut fixed = DecodedFields::new(schema.endpoint);
    for (index, spec) in schema.fixed_fields().enumerate() {
        fixed.values.push(decode_slot(schema, spec, index, &slots[index], hrp)?);
    }

    let mut groups = Vec::new();
    if stride > 0 {
        for (group_index, group) in slots[fixed_len..].chunks(stride).enumerate() {
            let mut fields = DecodedFields::new(schema.endpoint);
            for (offset, (spec, slot)) in schema.tail.iter().zip(group).enumerate() {
                let index = fixed_len + group_index * stride + offset;
                fields.values.push(decode_slot(schema, spec, index, slot, hrp)?);
            }
            groups.push(fields);
        }
    }

    Ok(Decoded { fixed, groups })
}

fn decode_slot(
    schema: &Schema,
    spec: &FieldSpec,
    index: usize,
    slot: &str,
    hrp: &str,
) -> Result<(FieldSpec, usize, FieldValue), SchemaError> {
    let value = FieldValue::decode(spec.kind, slot, hrp).map_err(|source| {
        tracing::debug!(
            endpoint = schema.endpoint,
            field = spec.name,
            index,
            slot = %slot_hex(slot).unwrap_or_else(|_| slot.to_string()),
            "Slot does not decode as {:?}",
            spec.kind
        );
        SchemaError::Field {
            endpoint: schema.endpoint,
            field: spec.name,
            index,
            source,
        }
    })?;
    Ok((*spec, index, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::primitives::slot_bytes;
    use base64::{Engine, engine::general_purpose::STANDARD};

    const HEADER: &[FieldSpec] = &[
        FieldSpec::new("owner", FieldKind::Address),
        FieldSpec::new("name", FieldKind::Text),
    ];
    const COUNTERS: &[FieldSpec] = &[
        FieldSpec::new("supply", FieldKind::Integer),
        FieldSpec::new("open", FieldKind::Flag),
    ];
    const PAIR: &[FieldSpec] = &[
        FieldSpec::new("token", FieldKind::Text),
        FieldSpec::new("amount", FieldKind::Integer),
    ];

    const WITH_TAIL: Schema = Schema {
        endpoint: "getThing",
        segments: &[HEADER, COUNTERS],
        tail: PAIR,
    };

    const NO_TAIL: Schema = Schema {
        endpoint: "getName",
        segments: &[&[FieldSpec::new("name", FieldKind::Text)]],
        tail: &[],
    };

    fn b64(bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    fn prefix() -> Vec<String> {
        vec![b64(&[9u8; 32]), b64(b"thing"), b64(&[0x03, 0xe8]), b64(&[0x01])]
    }

    #[test]
    fn test_schema_shape() {
        assert_eq!(WITH_TAIL.fixed_len(), 4);
        assert_eq!(WITH_TAIL.stride(), 2);
        assert!(WITH_TAIL.has_field("amount"));
        assert!(!WITH_TAIL.has_field("fee"));
    }

    #[test]
    fn test_assemble_prefix_and_pairs_in_order() {
        let mut slots = prefix();
        for (token, amount) in [("EGLD", 5u8), ("USDC-c76f1f", 7), ("EGLD", 9)] {
            slots.push(b64(token.as_bytes()));
            slots.push(b64(&[amount]));
        }

        let decoded = assemble(&WITH_TAIL, &QueryResult::new(slots), "erd").unwrap();

        assert_eq!(decoded.fixed.text("name").unwrap(), "thing");
        assert_eq!(decoded.fixed.integer("supply").unwrap(), U256::from(1000u64));
        assert!(decoded.fixed.flag("open").unwrap());
        assert_eq!(decoded.fixed.address("owner").unwrap().pubkey(), &[9u8; 32]);

        let pairs: Vec<(String, U256)> = decoded
            .groups
            .iter()
            .map(|g| (g.text("token").unwrap(), g.integer("amount").unwrap()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("EGLD".to_string(), U256::from(5u64)),
                ("USDC-c76f1f".to_string(), U256::from(7u64)),
                ("EGLD".to_string(), U256::from(9u64)),
            ]
        );
    }

    #[test]
    fn test_assemble_empty_tail() {
        let decoded = assemble(&WITH_TAIL, &QueryResult::new(prefix()), "erd").unwrap();
        assert!(decoded.groups.is_empty());
    }

    #[test]
    fn test_assemble_odd_tail_is_rejected() {
        let mut slots = prefix();
        slots.push(b64(b"EGLD"));

        let err = assemble(&WITH_TAIL, &QueryResult::new(slots), "erd").unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnalignedTail {
                endpoint: "getThing",
                remaining: 1,
                stride: 2
            }
        );
    }

    #[test]
    fn test_assemble_too_few_slots_names_first_missing_field() {
        let slots = prefix()[..2].to_vec();

        let err = assemble(&WITH_TAIL, &QueryResult::new(slots), "erd").unwrap_err();
        assert_eq!(
            err,
            SchemaError::TooFewSlots {
                endpoint: "getThing",
                expected: 4,
                actual: 2,
                field: "supply"
            }
        );
        assert_eq!(err.field(), Some("supply"));
    }

    #[test]
    fn test_assemble_reports_failing_field() {
        let mut slots = prefix();
        slots[0] = b64(&[1u8; 20]);

        let err = assemble(&WITH_TAIL, &QueryResult::new(slots), "erd").unwrap_err();
        assert_eq!(
            err,
            SchemaError::Field {
                endpoint: "getThing",
                field: "owner",
                index: 0,
                source: DecodeError::InvalidAddressLength { len: 20 },
            }
        );
    }

    #[test]
    fn test_assemble_reports_tail_slot_index() {
        let mut slots = prefix();
        slots.push(b64(b"EGLD"));
        slots.push("###".to_string());

        let err = assemble(&WITH_TAIL, &QueryResult::new(slots), "erd").unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Field {
                field: "amount",
                index: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_no_tail_ignores_surplus() {
        let slots = vec![b64(b"Alpha"), b64(b"extra")];
        let decoded = assemble(&NO_TAIL, &QueryResult::new(slots), "erd").unwrap();
        assert_eq!(decoded.fixed.text("name").unwrap(), "Alpha");
        assert!(decoded.groups.is_empty());
    }

    #[test]
    fn test_getters_check_kind_and_presence() {
        let decoded = assemble(&WITH_TAIL, &QueryResult::new(prefix()), "erd").unwrap();

        assert!(matches!(
            decoded.fixed.text("supply"),
            Err(SchemaError::MissingField { field: "supply", expected: FieldKind::Text, .. })
        ));
        assert_eq!(decoded.fixed.opt_integer("fee").unwrap(), None);
        assert!(decoded.fixed.integer("fee").is_err());
        assert_eq!(decoded.fixed.count("supply").unwrap(), 1000);
    }

    #[test]
    fn test_count_overflow_points_at_slot() {
        let mut slots = prefix();
        slots[2] = b64(&[0x01; 9]);
        assert_eq!(slot_bytes(&slots[2]).unwrap().len(), 9);

        let decoded = assemble(&WITH_TAIL, &QueryResult::new(slots), "erd").unwrap();
        assert!(matches!(
            decoded.fixed.count("supply"),
            Err(SchemaError::Field {
                field: "supply",
                index: 2,
                source: DecodeError::IntegerOverflow { .. },
                ..
            })
        ));
    }
}
