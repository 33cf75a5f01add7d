use crate::ExplorerError;
use crate::document::OperationKind;
use crate::introspection::Directive;
use crate::introspection::Field;
use crate::introspection::INTROSPECTION_QUERY;
use crate::introspection::IntrospectionSchema;
use crate::introspection::SchemaType;
use crate::introspection::TypeRef;
use crate::transport::GraphQLRequest;
use crate::transport::GraphQLTransport;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ExplorerError>;

/// A read-only, name-indexed view over one fetched [`IntrospectionSchema`].
///
/// Every lookup degrades to "absent" (`None` or an empty slice) rather than
/// failing when the schema references a type it never defined, so a
/// partially broken schema can still be explored.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeCatalog {
    directives: Vec<Directive>,
    mutation_type_name: Option<String>,
    query_type_name: Option<String>,
    subscription_type_name: Option<String>,
    types: IndexMap<String, SchemaType>,
}
impl TypeCatalog {
    /// Index the types of `schema` by name, preserving schema order.
    ///
    /// Unnamed entries are dropped, and the first definition wins when a
    /// name is defined more than once.
    pub fn from_schema(schema: IntrospectionSchema) -> Self {
        let IntrospectionSchema {
            directives,
            mutation_type,
            query_type,
            subscription_type,
            types: schema_types,
        } = schema;

        let mut types = IndexMap::with_capacity(schema_types.len());
        for schema_type in schema_types {
            let Some(name) = schema_type.name.clone() else {
                log::debug!(
                    "Skipping unnamed `{}` entry in the schema's type list.",
                    schema_type.kind,
                );
                continue;
            };
            if types.contains_key(&name) {
                log::debug!(
                    "Ignoring duplicate definition of type `{name}`.",
                );
                continue;
            }
            types.insert(name, schema_type);
        }

        log::trace!("Indexed {} schema types.", types.len());
        Self {
            directives,
            mutation_type_name: mutation_type.map(|root| root.name),
            query_type_name: query_type.map(|root| root.name),
            subscription_type_name: subscription_type.map(|root| root.name),
            types,
        }
    }

    /// Decode and index the JSON text of an introspection result. See
    /// [`IntrospectionSchema::from_json_str`] for the accepted shapes.
    pub fn from_response_json(json: &str) -> Result<Self> {
        IntrospectionSchema::from_json_str(json).map(Self::from_schema)
    }

    /// Send [`INTROSPECTION_QUERY`] to `endpoint` and index the result.
    pub async fn fetch<T: GraphQLTransport>(
        transport: &T,
        endpoint: &str,
    ) -> Result<Self> {
        log::debug!("Fetching the introspection schema from `{endpoint}`...");
        let response =
            transport.send(endpoint, &GraphQLRequest::new(INTROSPECTION_QUERY))
                .await?;
        let schema = IntrospectionSchema::from_json_value(response.into_data()?)?;
        let catalog = Self::from_schema(schema);
        log::debug!(
            "Loaded {} types from `{endpoint}`.",
            catalog.types.len(),
        );
        Ok(catalog)
    }

    pub fn directives(&self) -> &[Directive] {
        self.directives.as_slice()
    }

    /// All output fields of the type named by `type_ref`, or an empty slice
    /// if that type is unknown or has no fields (scalars, enums, input
    /// objects, unions).
    pub fn fields_of(&self, type_ref: &TypeRef) -> &[Field] {
        self.named_type_of(type_ref)
            .map(SchemaType::fields)
            .unwrap_or_default()
    }

    /// Look up the field `field_name` on the type named by `type_ref`.
    pub fn field_of(&self, type_ref: &TypeRef, field_name: &str) -> Option<&Field> {
        self.fields_of(type_ref)
            .iter()
            .find(|field| field.name() == field_name)
    }

    /// Indicates if the type named by `type_ref` is a `SCALAR` or `ENUM`.
    ///
    /// A reference to an unknown type is not a leaf.
    pub fn is_leaf(&self, type_ref: &TypeRef) -> bool {
        match self.named_type_of(type_ref) {
            Some(schema_type) => schema_type.is_leaf(),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn lookup(&self, name: &str) -> Option<&SchemaType> {
        self.types.get(name)
    }

    /// Resolve `type_ref` through its wrappers to the [`SchemaType`] it
    /// names.
    pub fn named_type_of(&self, type_ref: &TypeRef) -> Option<&SchemaType> {
        let Some(name) = type_ref.named_type() else {
            log::trace!("Type reference `{type_ref}` resolves to no named type.");
            return None;
        };
        let schema_type = self.lookup(name);
        if schema_type.is_none() {
            log::trace!("Type `{name}` is referenced but not defined.");
        }
        schema_type
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type_name.as_deref()
    }

    pub fn query_type_name(&self) -> Option<&str> {
        self.query_type_name.as_deref()
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type_name.as_deref()
    }

    /// The root type operations of `kind` are selected from.
    pub fn operation_type(&self, kind: OperationKind) -> Option<&SchemaType> {
        let name = match kind {
            OperationKind::Mutation => self.mutation_type_name()?,
            OperationKind::Query => self.query_type_name()?,
        };
        self.lookup(name)
    }

    /// The root fields selectable as operations of `kind`.
    pub fn operation_fields(&self, kind: OperationKind) -> &[Field] {
        self.operation_type(kind)
            .map(SchemaType::fields)
            .unwrap_or_default()
    }

    pub fn operation_field(
        &self,
        kind: OperationKind,
        operation_name: &str,
    ) -> Option<&Field> {
        self.operation_fields(kind)
            .iter()
            .find(|field| field.name() == operation_name)
    }

    /// All types, in schema order.
    pub fn types(&self) -> impl Iterator<Item = &SchemaType> {
        self.types.values()
    }

    /// All types except the `__`-prefixed introspection meta-types.
    pub fn user_types(&self) -> impl Iterator<Item = &SchemaType> {
        self.types().filter(|schema_type| !schema_type.is_introspection_type())
    }
}
