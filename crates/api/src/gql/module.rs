//! Schema modules: self-contained fragments of the graph.
//!
//! A module is plain data. It declares object and input types, may extend a
//! type declared by another module (`extend type Query { ... }`), and binds
//! resolvers to some of its fields. Types are referenced by name only, so a
//! module can point at a type another module owns; references are checked
//! when the registry composes the graph.

use std::fmt;
use std::sync::Arc;

use async_graphql::dynamic::{FieldFuture, ResolverContext, TypeRef};

/// Root query type every module extends.
pub const QUERY: &str = "Query";

pub type ResolverFn = Arc<dyn for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Object,
    InputObject,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Object => write!(f, "type"),
            TypeKind::InputObject => write!(f, "input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgDef {
    pub name: String,
    pub ty: TypeRef,
}

#[derive(Clone)]
pub struct FieldDef {
    pub name: String,
    pub ty: TypeRef,
    pub args: Vec<ArgDef>,
    pub description: Option<String>,
    pub resolver: Option<ResolverFn>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            args: Vec::new(),
            description: None,
            resolver: None,
        }
    }

    pub fn argument(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.args.push(ArgDef {
            name: name.into(),
            ty,
        });
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn resolve<F>(mut self, resolver: F) -> Self
    where
        F: for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync + 'static,
    {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    /// Name, type and arguments. Resolvers and descriptions are not part of
    /// the shape.
    pub fn same_shape(&self, other: &FieldDef) -> bool {
        self.name == other.name && self.ty == other.ty && self.args == other.args
    }
}

impl fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("args", &self.args)
            .field("resolver", &self.resolver.is_some())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct TypeDef {
    pub name: String,
    pub kind: TypeKind,
    /// `extend type X`: appends fields to a type declared elsewhere.
    pub extension: bool,
    pub description: Option<String>,
    pub fields: Vec<FieldDef>,
}

impl TypeDef {
    pub fn object(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeKind::Object, false)
    }

    pub fn input(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeKind::InputObject, false)
    }

    pub fn extend(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeKind::Object, true)
    }

    fn with_kind(name: impl Into<String>, kind: TypeKind, extension: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            extension,
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Nullable `Float` fields, one per name, in order.
    pub fn float_fields(mut self, names: &[&str]) -> Self {
        self.fields.extend(
            names
                .iter()
                .map(|name| FieldDef::new(*name, TypeRef::named(TypeRef::FLOAT))),
        );
        self
    }
}

#[derive(Debug, Clone)]
pub struct SchemaModule {
    pub id: &'static str,
    pub types: Vec<TypeDef>,
}

impl SchemaModule {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            types: Vec::new(),
        }
    }

    pub fn with_type(mut self, ty: TypeDef) -> Self {
        self.types.push(ty);
        self
    }
}

/// Innermost named type of a reference, e.g. `Food` for `[Food]!`.
pub fn base_type_name(ty: &TypeRef) -> &str {
    match ty {
        TypeRef::Named(name) => name,
        TypeRef::NonNull(inner) | TypeRef::List(inner) => base_type_name(inner),
    }
}
