//! Metadata tree model.
//!
//! A [`MetadataTree`] is the nested name/value record the inspection layer
//! produces for one annotation-like declaration. The engine only consumes
//! this model; building it is the caller's job.

use indexmap::IndexMap;

/// A single metadata value.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataNode {
    /// A raw scalar, always carried as its string spelling.
    Scalar(String),
    /// A reference to a type, with no runtime value beyond its identity.
    TypeRef(String),
    /// A nested metadata record.
    Tree(MetadataTree),
    /// An ordered list of scalars or nested records.
    List(Vec<MetadataNode>),
}

impl MetadataNode {
    /// Returns the raw scalar value if this node is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            MetadataNode::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the nested record if this node is a tree.
    pub fn as_tree(&self) -> Option<&MetadataTree> {
        match self {
            MetadataNode::Tree(tree) => Some(tree),
            _ => None,
        }
    }
}

impl From<&str> for MetadataNode {
    fn from(value: &str) -> Self {
        MetadataNode::Scalar(value.to_string())
    }
}

impl From<String> for MetadataNode {
    fn from(value: String) -> Self {
        MetadataNode::Scalar(value)
    }
}

impl From<MetadataTree> for MetadataNode {
    fn from(tree: MetadataTree) -> Self {
        MetadataNode::Tree(tree)
    }
}

impl From<Vec<MetadataNode>> for MetadataNode {
    fn from(nodes: Vec<MetadataNode>) -> Self {
        MetadataNode::List(nodes)
    }
}

/// A nested metadata record: the construct kind it originates from plus its
/// members in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataTree {
    /// The kind of construct this record was declared with.
    kind: ConstructKind,
    /// Member values keyed by member name, in declaration order.
    entries: IndexMap<String, MetadataNode>,
}

impl MetadataTree {
    /// Creates an empty record of the given construct kind.
    pub fn new(kind: ConstructKind) -> Self {
        Self {
            kind,
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty generic record.
    pub fn generic() -> Self {
        Self::new(ConstructKind::Generic)
    }

    /// Appends a member value.
    pub fn entry(mut self, name: impl Into<String>, node: impl Into<MetadataNode>) -> Self {
        self.insert(name, node);
        self
    }

    /// Inserts a member value, replacing any existing member of the same name.
    pub fn insert(&mut self, name: impl Into<String>, node: impl Into<MetadataNode>) {
        self.entries.insert(name.into(), node.into());
    }

    /// Returns the construct kind of this record.
    pub fn kind(&self) -> ConstructKind {
        self.kind
    }

    /// Returns the member value of the given name.
    pub fn get(&self, name: &str) -> Option<&MetadataNode> {
        self.entries.get(name)
    }

    /// Iterates the members in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &MetadataNode)> {
        self.entries.iter()
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the record has no members.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The construct kinds the flattener treats specially.
///
/// Everything not in the boundary table flattens under the generic rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConstructKind {
    /// Any construct without special flattening rules.
    #[default]
    Generic,
    /// A security requirement declaration.
    SecurityRequirement,
    /// A vendor extension declaration.
    Extension,
    /// A server declaration.
    Server,
    /// A server variable declaration.
    ServerVariable,
}

impl ConstructKind {
    /// Maps a declared construct name to its kind.
    ///
    /// This is the single boundary between the inspection layer's construct
    /// names and the engine; unknown names map to [`ConstructKind::Generic`].
    pub fn from_declared(name: &str) -> Self {
        match name {
            "io.swagger.v3.oas.annotations.security.SecurityRequirement" => {
                ConstructKind::SecurityRequirement
            }
            "io.swagger.v3.oas.annotations.extensions.Extension" => ConstructKind::Extension,
            "io.swagger.v3.oas.annotations.servers.Server" => ConstructKind::Server,
            "io.swagger.v3.oas.annotations.servers.ServerVariable" => ConstructKind::ServerVariable,
            _ => ConstructKind::Generic,
        }
    }
}

/// Enum-type capability reported by the inspection layer: the accessors that
/// yield an enum's serialized raw value.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumInfo {
    /// Qualified name of the enum type.
    type_name: String,
    /// Raw-value accessors in declaration order.
    raw_value_accessors: Vec<Accessor>,
}

impl EnumInfo {
    /// Creates enum info with no raw-value accessors.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            raw_value_accessors: Vec::new(),
        }
    }

    /// Appends a raw-value accessor.
    pub fn raw_value_accessor(mut self, accessor: Accessor) -> Self {
        self.raw_value_accessors.push(accessor);
        self
    }

    /// Returns the qualified name of the enum type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the raw-value accessors in declaration order.
    pub fn raw_value_accessors(&self) -> &[Accessor] {
        &self.raw_value_accessors
    }
}

/// An accessor method on an enum type.
#[derive(Debug, Clone, PartialEq)]
pub struct Accessor {
    /// Accessor name.
    name: String,
    /// What the accessor returns.
    returns: AccessorReturn,
}

impl Accessor {
    /// Creates an accessor.
    pub fn new(name: impl Into<String>, returns: AccessorReturn) -> Self {
        Self {
            name: name.into(),
            returns,
        }
    }

    /// Returns the accessor name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the accessor's return description.
    pub fn returns(&self) -> &AccessorReturn {
        &self.returns
    }
}

/// The return type of a raw-value accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessorReturn {
    /// A scalar type, identified by its qualified name.
    Scalar {
        /// Qualified name of the scalar type.
        type_name: String,
        /// Whether the accessor returns an array of that type.
        is_array: bool,
    },
    /// Another enum type, resolved recursively.
    Enum(Box<EnumInfo>),
}
