use core::fmt;

use heapless::Vec;

use crate::domain::ports::{ChannelGroup, ChannelId};

/// ZCL cluster ids
pub const CLUSTER_ID_ON_OFF: u16 = 0x0006;
pub const CLUSTER_ID_LEVEL_CONTROL: u16 = 0x0008;
pub const CLUSTER_ID_COLOR_CONTROL: u16 = 0x0300;

/// ZCL attribute ids, resolved per cluster
pub const ATTR_ON_OFF_ON_OFF_ID: u16 = 0x0000;
pub const ATTR_LEVEL_CONTROL_CURRENT_LEVEL_ID: u16 = 0x0000;
pub const ATTR_COLOR_CONTROL_CURRENT_X_ID: u16 = 0x0003;
pub const ATTR_COLOR_CONTROL_CURRENT_Y_ID: u16 = 0x0004;
pub const ATTR_COLOR_CONTROL_COLOR_TEMPERATURE_ID: u16 = 0x0007;

/// ZCL data type ids
pub const ZCL_TYPE_BOOL: u8 = 0x10;
pub const ZCL_TYPE_U8: u8 = 0x20;
pub const ZCL_TYPE_U16: u8 = 0x21;

pub const ZCL_STATUS_SUCCESS: u8 = 0x00;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterTag {
    OnOff,
    LevelControl,
    ColorControl,
}

impl ClusterTag {
    pub const fn from_raw(id: u16) -> Option<Self> {
        match id {
            CLUSTER_ID_ON_OFF => Some(ClusterTag::OnOff),
            CLUSTER_ID_LEVEL_CONTROL => Some(ClusterTag::LevelControl),
            CLUSTER_ID_COLOR_CONTROL => Some(ClusterTag::ColorControl),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeTag {
    OnOff,
    CurrentLevel,
    ColorTemperature,
    CurrentX,
    CurrentY,
}

impl AttributeTag {
    /// Resolve an attribute id within its cluster
    pub const fn from_raw(cluster: ClusterTag, id: u16) -> Option<Self> {
        match (cluster, id) {
            (ClusterTag::OnOff, ATTR_ON_OFF_ON_OFF_ID) => Some(AttributeTag::OnOff),
            (ClusterTag::LevelControl, ATTR_LEVEL_CONTROL_CURRENT_LEVEL_ID) => {
                Some(AttributeTag::CurrentLevel)
            }
            (ClusterTag::ColorControl, ATTR_COLOR_CONTROL_CURRENT_X_ID) => {
                Some(AttributeTag::CurrentX)
            }
            (ClusterTag::ColorControl, ATTR_COLOR_CONTROL_CURRENT_Y_ID) => {
                Some(AttributeTag::CurrentY)
            }
            (ClusterTag::ColorControl, ATTR_COLOR_CONTROL_COLOR_TEMPERATURE_ID) => {
                Some(AttributeTag::ColorTemperature)
            }
            _ => None,
        }
    }
}

/// Primitive type of an attribute payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Bool,
    U8,
    U16,
}

impl ValueType {
    pub const fn from_raw(id: u8) -> Option<Self> {
        match id {
            ZCL_TYPE_BOOL => Some(ValueType::Bool),
            ZCL_TYPE_U8 => Some(ValueType::U8),
            ZCL_TYPE_U16 => Some(ValueType::U16),
            _ => None,
        }
    }

    /// Encoded payload size in bytes
    pub const fn size(self) -> usize {
        match self {
            ValueType::Bool | ValueType::U8 => 1,
            ValueType::U16 => 2,
        }
    }
}

/// A decoded attribute payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeValue {
    Bool(bool),
    U8(u8),
    U16(u16),
}

impl AttributeValue {
    pub const fn value_type(&self) -> ValueType {
        match self {
            AttributeValue::Bool(_) => ValueType::Bool,
            AttributeValue::U8(_) => ValueType::U8,
            AttributeValue::U16(_) => ValueType::U16,
        }
    }

    /// Decode a raw payload of the given type.
    ///
    /// Multi-byte values are little-endian; booleans must be `0x00` or `0x01`.
    pub fn decode(value_type: ValueType, bytes: &[u8]) -> Result<Self, Rejection> {
        if bytes.is_empty() {
            return Err(Rejection::EmptyPayload);
        }
        if bytes.len() != value_type.size() {
            return Err(Rejection::LengthMismatch {
                expected: value_type.size(),
                actual: bytes.len(),
            });
        }

        match (value_type, bytes) {
            (ValueType::Bool, [0x00]) => Ok(AttributeValue::Bool(false)),
            (ValueType::Bool, [0x01]) => Ok(AttributeValue::Bool(true)),
            (ValueType::Bool, [other]) => Err(Rejection::InvalidBool(*other)),
            (ValueType::U8, [value]) => Ok(AttributeValue::U8(*value)),
            (ValueType::U16, [lo, hi]) => Ok(AttributeValue::U16(u16::from_le_bytes([*lo, *hi]))),
            _ => Err(Rejection::LengthMismatch {
                expected: value_type.size(),
                actual: bytes.len(),
            }),
        }
    }
}

/// Attribute change delivered by the network stack
#[derive(Debug, Clone, Copy)]
pub struct AttributeEvent<'a> {
    pub endpoint_id: u8,
    pub cluster: ClusterTag,
    pub attribute: AttributeTag,
    pub value_type: ValueType,
    /// Raw payload, `None` when the stack delivered no value
    pub value: Option<&'a [u8]>,
}

impl<'a> AttributeEvent<'a> {
    pub const fn new(
        endpoint_id: u8,
        cluster: ClusterTag,
        attribute: AttributeTag,
        value_type: ValueType,
        value: &'a [u8],
    ) -> Self {
        Self {
            endpoint_id,
            cluster,
            attribute,
            value_type,
            value: Some(value),
        }
    }

    pub fn payload_size(&self) -> usize {
        self.value.map_or(0, <[u8]>::len)
    }
}

/// Attribute message as the stack reports it, with numeric ids
#[derive(Debug, Clone, Copy)]
pub struct RawAttributeMessage<'a> {
    pub endpoint_id: u8,
    pub cluster_id: u16,
    pub attribute_id: u16,
    pub data_type: u8,
    pub status: u8,
    pub data: Option<&'a [u8]>,
}

impl<'a> RawAttributeMessage<'a> {
    /// Resolve numeric ids into an [`AttributeEvent`]
    pub fn decode(&self) -> Result<AttributeEvent<'a>, Rejection> {
        if self.status != ZCL_STATUS_SUCCESS {
            return Err(Rejection::ErrorStatus(self.status));
        }
        let cluster =
            ClusterTag::from_raw(self.cluster_id).ok_or(Rejection::UnknownCluster(self.cluster_id))?;
        let attribute = AttributeTag::from_raw(cluster, self.attribute_id).ok_or(
            Rejection::UnknownAttribute {
                cluster: self.cluster_id,
                attribute: self.attribute_id,
            },
        )?;
        let value_type =
            ValueType::from_raw(self.data_type).ok_or(Rejection::UnknownDataType(self.data_type))?;

        Ok(AttributeEvent {
            endpoint_id: self.endpoint_id,
            cluster,
            attribute,
            value_type,
            value: self.data,
        })
    }
}

/// Reason an event was acknowledged but not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No payload, or a zero-length one
    EmptyPayload,
    /// Payload type does not match the attribute
    TypeMismatch { expected: ValueType, actual: ValueType },
    /// Payload size does not match its type
    LengthMismatch { expected: usize, actual: usize },
    /// Boolean payload other than 0 or 1
    InvalidBool(u8),
    /// No endpoint is configured with this id
    UnknownEndpoint(u8),
    /// Endpoint does not handle this attribute
    UnsupportedAttribute {
        cluster: ClusterTag,
        attribute: AttributeTag,
    },
    /// Stack reported a non-success status
    ErrorStatus(u8),
    UnknownCluster(u16),
    UnknownAttribute { cluster: u16, attribute: u16 },
    UnknownDataType(u8),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::EmptyPayload => write!(f, "empty payload"),
            Rejection::TypeMismatch { expected, actual } => {
                write!(f, "type mismatch: expected {:?}, got {:?}", expected, actual)
            }
            Rejection::LengthMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {} bytes, got {}", expected, actual)
            }
            Rejection::InvalidBool(v) => write!(f, "invalid boolean 0x{:02x}", v),
            Rejection::UnknownEndpoint(id) => write!(f, "unknown endpoint {}", id),
            Rejection::UnsupportedAttribute { cluster, attribute } => {
                write!(f, "unsupported attribute {:?}/{:?}", cluster, attribute)
            }
            Rejection::ErrorStatus(status) => write!(f, "error status 0x{:02x}", status),
            Rejection::UnknownCluster(id) => write!(f, "unknown cluster 0x{:04x}", id),
            Rejection::UnknownAttribute { cluster, attribute } => {
                write!(f, "unknown attribute 0x{:04x} in cluster 0x{:04x}", attribute, cluster)
            }
            Rejection::UnknownDataType(id) => write!(f, "unknown data type 0x{:02x}", id),
        }
    }
}

/// Duty values for every channel of one group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelFrame {
    pub group: ChannelGroup,
    pub duties: Vec<(ChannelId, u8), 4>,
}

impl ChannelFrame {
    pub fn new(group: ChannelGroup) -> Self {
        Self {
            group,
            duties: Vec::new(),
        }
    }

    /// Duty staged for a channel of this frame
    pub fn duty(&self, channel: ChannelId) -> Option<u8> {
        self.duties
            .iter()
            .find(|(ch, _)| *ch == channel)
            .map(|(_, duty)| *duty)
    }
}
