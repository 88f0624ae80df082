//! Composition of schema modules into one executable schema.
//!
//! Each type name owns an append-only field list. Declarations are merged
//! first, in module order, then every `extend type` appends its fields to the
//! declared type. Conflicts are reported instead of silently overwritten:
//!
//! - the same type declared twice must have the same kind and field shapes;
//! - a field may only be added to a type once;
//! - a `(type, field)` pair may only be bound to one resolver.
//!
//! The merged registry is then lowered into an `async_graphql::dynamic`
//! schema. Fields without a resolver read the value of the same name from
//! their parent object.

use std::collections::{BTreeMap, HashSet};

use async_graphql::dynamic::{Field, InputObject, InputValue, Object, Schema, SchemaBuilder};

use super::error::CompositionError;
use super::module::{base_type_name, FieldDef, SchemaModule, TypeDef, TypeKind, QUERY};
use super::resolve::structural_field;

const BUILTIN_SCALARS: &[&str] = &["Int", "Float", "String", "Boolean", "ID"];

#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: Vec<SchemaModule>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_modules(
        modules: impl IntoIterator<Item = SchemaModule>,
    ) -> Result<Self, CompositionError> {
        let mut registry = Self::new();
        for module in modules {
            registry.register(module)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, module: SchemaModule) -> Result<(), CompositionError> {
        if self.modules.iter().any(|m| m.id == module.id) {
            return Err(CompositionError::DuplicateModule(module.id));
        }
        self.modules.push(module);
        Ok(())
    }

    pub fn module_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.modules.iter().map(|m| m.id)
    }

    pub fn compose(&self) -> Result<ComposedGraph, CompositionError> {
        let mut graph = ComposedGraph::default();

        for module in &self.modules {
            for ty in module.types.iter().filter(|t| !t.extension) {
                graph.declare(module.id, ty)?;
            }
        }
        for module in &self.modules {
            for ty in module.types.iter().filter(|t| t.extension) {
                graph.extend(module.id, ty)?;
            }
        }

        graph.check_references()?;
        tracing::debug!(
            modules = self.modules.len(),
            types = graph.types.len(),
            resolvers = graph.resolvers.len(),
            "Composed schema modules"
        );
        Ok(graph)
    }
}

/// Which module owns the resolver of each `(type, field)`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolverTable {
    owners: BTreeMap<String, BTreeMap<String, &'static str>>,
}

impl ResolverTable {
    fn bind(
        &mut self,
        type_name: &str,
        field: &str,
        module: &'static str,
    ) -> Result<(), CompositionError> {
        let fields = self.owners.entry(type_name.to_string()).or_default();
        if let Some(&first) = fields.get(field) {
            return Err(CompositionError::DuplicateResolver {
                type_name: type_name.to_string(),
                field: field.to_string(),
                first,
                second: module,
            });
        }
        fields.insert(field.to_string(), module);
        Ok(())
    }

    pub fn owner(&self, type_name: &str, field: &str) -> Option<&'static str> {
        self.owners.get(type_name)?.get(field).copied()
    }

    pub fn fields(&self, type_name: &str) -> Vec<&str> {
        self.owners
            .get(type_name)
            .map(|fields| fields.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.owners.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
struct MergedField {
    def: FieldDef,
    declared_by: &'static str,
}

#[derive(Debug)]
struct MergedType {
    kind: TypeKind,
    description: Option<String>,
    declared_by: &'static str,
    /// Fields from the declaration; anything after comes from extensions.
    declared_len: usize,
    fields: Vec<MergedField>,
}

#[derive(Debug, Default)]
pub struct ComposedGraph {
    types: BTreeMap<String, MergedType>,
    resolvers: ResolverTable,
}

impl ComposedGraph {
    pub fn resolvers(&self) -> &ResolverTable {
        &self.resolvers
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.types.keys().map(String::as_str)
    }

    pub fn field_names(&self, type_name: &str) -> Option<Vec<&str>> {
        self.types
            .get(type_name)
            .map(|ty| ty.fields.iter().map(|f| f.def.name.as_str()).collect())
    }

    fn declare(&mut self, module: &'static str, ty: &TypeDef) -> Result<(), CompositionError> {
        let Some(existing) = self.types.get_mut(&ty.name) else {
            let mut seen = HashSet::new();
            for field in &ty.fields {
                if !seen.insert(field.name.as_str()) {
                    return Err(CompositionError::DuplicateField {
                        type_name: ty.name.clone(),
                        field: field.name.clone(),
                        first: module,
                        second: module,
                    });
                }
                if field.resolver.is_some() {
                    self.resolvers.bind(&ty.name, &field.name, module)?;
                }
            }
            self.types.insert(
                ty.name.clone(),
                MergedType {
                    kind: ty.kind,
                    description: ty.description.clone(),
                    declared_by: module,
                    declared_len: ty.fields.len(),
                    fields: ty
                        .fields
                        .iter()
                        .map(|def| MergedField {
                            def: def.clone(),
                            declared_by: module,
                        })
                        .collect(),
                },
            );
            return Ok(());
        };

        let declared = &existing.fields[..existing.declared_len];
        let same_shape = existing.kind == ty.kind
            && declared.len() == ty.fields.len()
            && declared
                .iter()
                .zip(&ty.fields)
                .all(|(a, b)| a.def.same_shape(b));
        if !same_shape {
            return Err(CompositionError::IncompatibleType {
                kind: ty.kind,
                type_name: ty.name.clone(),
                first: existing.declared_by,
                second: module,
            });
        }

        // Identical redeclaration: only resolvers can be contributed.
        for (merged, field) in existing.fields.iter_mut().zip(&ty.fields) {
            if let Some(resolver) = &field.resolver {
                self.resolvers.bind(&ty.name, &field.name, module)?;
                merged.def.resolver = Some(resolver.clone());
            }
        }
        if existing.description.is_none() {
            existing.description = ty.description.clone();
        }
        Ok(())
    }

    fn extend(&mut self, module: &'static str, ty: &TypeDef) -> Result<(), CompositionError> {
        let existing =
            self.types
                .get_mut(&ty.name)
                .ok_or_else(|| CompositionError::UnknownExtension {
                    module,
                    type_name: ty.name.clone(),
                })?;

        if existing.kind != ty.kind {
            return Err(CompositionError::IncompatibleType {
                kind: ty.kind,
                type_name: ty.name.clone(),
                first: existing.declared_by,
                second: module,
            });
        }

        for field in &ty.fields {
            if let Some(prev) = existing.fields.iter().find(|f| f.def.name == field.name) {
                return Err(CompositionError::DuplicateField {
                    type_name: ty.name.clone(),
                    field: field.name.clone(),
                    first: prev.declared_by,
                    second: module,
                });
            }
            if field.resolver.is_some() {
                self.resolvers.bind(&ty.name, &field.name, module)?;
            }
            existing.fields.push(MergedField {
                def: field.clone(),
                declared_by: module,
            });
        }
        Ok(())
    }

    fn check_references(&self) -> Result<(), CompositionError> {
        let known = |name: &str| BUILTIN_SCALARS.contains(&name) || self.types.contains_key(name);

        for (type_name, ty) in &self.types {
            for field in &ty.fields {
                let refs = std::iter::once(&field.def.ty).chain(field.def.args.iter().map(|a| &a.ty));
                for type_ref in refs {
                    let target = base_type_name(type_ref);
                    if !known(target) {
                        return Err(CompositionError::UnknownType {
                            type_name: type_name.clone(),
                            field: field.def.name.clone(),
                            missing: target.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Lower the merged registry into a dynamic schema builder rooted at
    /// `Query`. Limits, context data and `finish()` are left to the caller.
    pub fn into_builder(self) -> SchemaBuilder {
        let mut builder = Schema::build(QUERY, None, None);
        for (name, ty) in self.types {
            builder = match ty.kind {
                TypeKind::Object => builder.register(lower_object(name, ty)),
                TypeKind::InputObject => builder.register(lower_input(name, ty)),
            };
        }
        builder
    }
}

fn lower_object(name: String, ty: MergedType) -> Object {
    let mut object = Object::new(name);
    if let Some(description) = ty.description {
        object = object.description(description);
    }

    for MergedField { def, .. } in ty.fields {
        let mut field = match def.resolver {
            Some(resolver) => Field::new(def.name, def.ty, move |ctx| resolver(ctx)),
            None => Field::new(def.name.clone(), def.ty, structural_field(def.name)),
        };
        for arg in def.args {
            field = field.argument(InputValue::new(arg.name, arg.ty));
        }
        if let Some(description) = def.description {
            field = field.description(description);
        }
        object = object.field(field);
    }
    object
}

fn lower_input(name: String, ty: MergedType) -> InputObject {
    let mut input = InputObject::new(name);
    if let Some(description) = ty.description {
        input = input.description(description);
    }

    for MergedField { def, .. } in ty.fields {
        let mut value = InputValue::new(def.name, def.ty);
        if let Some(description) = def.description {
            value = value.description(description);
        }
        input = input.field(value);
    }
    input
}
