//! Metadata tree flattening.
//!
//! [`flatten`] turns a nested [`MetadataTree`] into a flat mapping keyed by
//! document field names, ready for materialization. Four construct kinds get
//! dedicated shapes; everything else flattens generically. Unrecognized and
//! empty members are omitted, flattening itself never fails.

use serde_json::Value;

use crate::metadata::{ConstructKind, MetadataNode, MetadataTree};

/// The flat mapping produced by [`flatten`] and consumed by materialization.
pub type FlatMap = serde_json::Map<String, Value>;

/// The flat key merged vendor extensions are stored under.
const EXTENSIONS_KEY: &str = "extensions";

/// Flattens a metadata tree into a flat document-field mapping.
pub fn flatten(tree: &MetadataTree) -> FlatMap {
    let mut flat = FlatMap::new();
    for (name, node) in tree.entries() {
        match node {
            MetadataNode::Scalar(raw) => {
                flat.insert(name.clone(), scalar_value(raw));
            }
            MetadataNode::TypeRef(type_name) => {
                flat.insert(name.clone(), Value::String(type_name.clone()));
            }
            MetadataNode::Tree(nested) => {
                flat.insert(name.clone(), Value::Object(flatten(nested)));
            }
            MetadataNode::List(elements) => flatten_list(&mut flat, name, elements),
        }
    }
    flat
}

/// A scalar that spells an embedded JSON object is stored parsed; anything
/// else is kept as its raw spelling.
fn scalar_value(raw: &str) -> Value {
    if raw.trim_start().starts_with('{')
        && let Ok(map) = serde_json::from_str::<FlatMap>(raw)
    {
        return Value::Object(map);
    }
    Value::String(raw.to_string())
}

fn flatten_list(flat: &mut FlatMap, name: &str, elements: &[MetadataNode]) {
    if elements.is_empty() {
        return;
    }
    if let Some(trees) = all_trees(elements) {
        flatten_tree_list(flat, name, &trees);
        return;
    }
    if let Some(raws) = all_scalars(elements) {
        flat.insert(name.to_string(), Value::Array(raws));
    }
    // mixed lists have no document representation
}

fn all_trees<'a>(elements: &'a [MetadataNode]) -> Option<Vec<&'a MetadataTree>> {
    elements.iter().map(MetadataNode::as_tree).collect()
}

fn all_scalars(elements: &[MetadataNode]) -> Option<Vec<Value>> {
    elements
        .iter()
        .map(|node| node.as_scalar().map(|raw| Value::String(raw.to_string())))
        .collect()
}

fn flatten_tree_list(flat: &mut FlatMap, name: &str, trees: &[&MetadataTree]) {
    if all_of_kind(trees, ConstructKind::SecurityRequirement) {
        let requirements = security_requirements(trees);
        if !requirements.is_empty() {
            flat.insert(name.to_string(), Value::Array(requirements));
        }
    } else if all_of_kind(trees, ConstructKind::Extension) {
        let extensions = merge_extensions(trees);
        if !extensions.is_empty() {
            flat.insert(EXTENSIONS_KEY.to_string(), Value::Object(extensions));
        }
    } else if all_of_kind(trees, ConstructKind::Server) {
        let servers: Vec<Value> = trees.iter().map(|tree| Value::Object(flatten(tree))).collect();
        flat.insert(name.to_string(), Value::Array(servers));
    } else if all_of_kind(trees, ConstructKind::ServerVariable) {
        let variables = server_variables(trees);
        if !variables.is_empty() {
            flat.insert(name.to_string(), Value::Object(variables));
        }
    } else if let [single] = trees {
        // a single-element generic list behaves as if it were not a list
        flat.insert(name.to_string(), Value::Object(flatten(single)));
    } else {
        let many: Vec<Value> = trees.iter().map(|tree| Value::Object(flatten(tree))).collect();
        flat.insert(name.to_string(), Value::Array(many));
    }
}

fn all_of_kind(trees: &[&MetadataTree], kind: ConstructKind) -> bool {
    trees.iter().all(|tree| tree.kind() == kind)
}

/// Security requirements become a sequence of single-entry mappings, each
/// keying a requirement name to its scope list. Entries without a name have
/// nothing to key on and are dropped.
fn security_requirements(trees: &[&MetadataTree]) -> Vec<Value> {
    let mut requirements = Vec::new();
    for tree in trees {
        let Some(name) = tree.get("name").and_then(MetadataNode::as_scalar) else {
            continue;
        };
        let scopes: Vec<Value> = match tree.get("scopes") {
            Some(MetadataNode::Scalar(scope)) => vec![Value::String(scope.clone())],
            Some(MetadataNode::List(nodes)) => nodes
                .iter()
                .filter_map(MetadataNode::as_scalar)
                .map(|scope| Value::String(scope.to_string()))
                .collect(),
            _ => Vec::new(),
        };
        let mut requirement = FlatMap::new();
        requirement.insert(name.to_string(), Value::Array(scopes));
        requirements.push(Value::Object(requirement));
    }
    requirements
}

/// Extension entries merge into one flat map; a key declared by a later
/// entry overwrites the earlier value.
fn merge_extensions(trees: &[&MetadataTree]) -> FlatMap {
    let mut merged = FlatMap::new();
    for tree in trees {
        for (key, value) in flatten(tree) {
            merged.insert(key, value);
        }
    }
    merged
}

/// Server variables become a mapping keyed by each variable's name, with the
/// declaration field names rewritten to their document spellings. Entries
/// without a name are dropped.
fn server_variables(trees: &[&MetadataTree]) -> FlatMap {
    let mut variables = FlatMap::new();
    for tree in trees {
        let Some(name) = tree.get("name").and_then(MetadataNode::as_scalar) else {
            continue;
        };
        let mut fields = flatten(tree);
        fields.remove("name");
        if let Some(default) = fields.remove("defaultValue") {
            fields.insert("default".to_string(), default);
        }
        if let Some(allowable) = fields.remove("allowableValues") {
            fields.insert("enum".to_string(), allowable);
        }
        variables.insert(name.to_string(), Value::Object(fields));
    }
    variables
}
