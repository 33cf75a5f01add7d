use crate::ExplorerError;
use crate::catalog::TypeCatalog;
use crate::classify::FieldClass;
use crate::classify::FieldClassifier;
use crate::document::BuiltOperation;
use crate::document::OperationKind;
use crate::document::QueryDocumentBuilder;
use crate::introspection::Field;
use crate::selection::Selection;
use crate::selection::SelectionTree;
use crate::session::ActiveOperation;
use crate::session::SessionConfig;
use crate::synthesis::SelectionSetSynthesizer;
use crate::transport::GraphQLTransport;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ExplorerError>;

/// The state behind an interactive query builder: which operation is being
/// built, which of its fields are checked, the raw argument values typed so
/// far, and the result of the last execution.
///
/// Every mutator is a discrete, synchronous state update; only
/// [`execute`](ExplorerSession::execute) awaits. Overlapping executions are
/// last-writer-wins on [`last_result`](ExplorerSession::last_result).
#[derive(Clone, Debug)]
pub struct ExplorerSession<'catalog> {
    catalog: &'catalog TypeCatalog,
    config: SessionConfig,
    last_result: Option<Result<serde_json::Value>>,
    operation: Option<ActiveOperation<'catalog>>,
}
impl<'catalog> ExplorerSession<'catalog> {
    pub fn new(catalog: &'catalog TypeCatalog) -> Self {
        Self::with_config(catalog, SessionConfig::default())
    }

    pub fn with_config(catalog: &'catalog TypeCatalog, config: SessionConfig) -> Self {
        Self {
            catalog,
            config,
            last_result: None,
            operation: None,
        }
    }

    pub fn catalog(&self) -> &'catalog TypeCatalog {
        self.catalog
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn classifier(&self) -> FieldClassifier<'catalog> {
        FieldClassifier::new(self.catalog)
            .with_detection(self.config.synthesizer.connection_detection)
    }

    /// The root fields that can be built as operations of `kind`.
    pub fn selectable_fields(&self, kind: OperationKind) -> &'catalog [Field] {
        self.catalog.operation_fields(kind)
    }

    pub fn classify(&self, field: &Field) -> FieldClass {
        self.classifier().classify(field)
    }

    /// The node leaf fields offered as sub-fields of a connection field.
    pub fn connection_subfields(&self, field: &Field) -> Vec<&'catalog Field> {
        self.classifier().connection_node_fields(field)
    }

    pub fn active_operation(&self) -> Option<&ActiveOperation<'catalog>> {
        self.operation.as_ref()
    }

    /// The fields of the active operation's return type, i.e. everything
    /// that can be checked.
    pub fn return_fields(&self) -> &'catalog [Field] {
        match &self.operation {
            Some(operation) => self.catalog.fields_of(operation.field.type_ref()),
            None => &[],
        }
    }

    pub fn last_result(&self) -> Option<&Result<serde_json::Value>> {
        self.last_result.as_ref()
    }

    /// Start building `operation_name`, discarding all state belonging to
    /// the previous operation.
    ///
    /// The return type's default leaf fields start out checked.
    pub fn select_operation(
        &mut self,
        kind: OperationKind,
        operation_name: &str,
    ) -> Result<()> {
        if kind == OperationKind::Mutation && self.catalog.operation_type(kind).is_none() {
            return Err(ExplorerError::NoMutationType);
        }
        if kind == OperationKind::Query && self.catalog.operation_type(kind).is_none() {
            return Err(ExplorerError::NoQueryType);
        }
        let field =
            self.catalog.operation_field(kind, operation_name)
                .ok_or_else(|| ExplorerError::UnknownOperation {
                    operation_kind: kind,
                    operation_name: operation_name.to_string(),
                })?;

        let classifier = self.classifier();
        let selections: SelectionTree =
            classifier.default_leaf_fields(field.type_ref())
                .into_iter()
                .filter_map(|name| self.catalog.field_of(field.type_ref(), name))
                .map(|subfield| self.new_selection(subfield))
                .collect();

        log::debug!(
            "Selected {kind} `{operation_name}` with {} default fields.",
            selections.len(),
        );
        self.last_result = None;
        self.operation = Some(ActiveOperation {
            arguments: IndexMap::new(),
            field,
            kind,
            selections,
        });
        Ok(())
    }

    pub fn clear_operation(&mut self) {
        self.operation = None;
        self.last_result = None;
    }

    /// Uncheck every field of the active operation.
    pub fn clear_selections(&mut self) -> Result<()> {
        self.operation_mut()?.selections.clear();
        Ok(())
    }

    /// Check `field_name` if it is unchecked, uncheck it otherwise. Returns
    /// whether it is checked afterwards.
    ///
    /// Checking a connection pre-checks the first
    /// [`default_connection_subfields`](SessionConfig::default_connection_subfields)
    /// of its node leaf fields.
    pub fn toggle_field(&mut self, field_name: &str) -> Result<bool> {
        let field = self.return_field(field_name)?;
        let selection = self.new_selection(field);
        let operation = self.operation_mut()?;
        if operation.selections.remove(field_name).is_some() {
            return Ok(false);
        }
        operation.selections.insert(selection);
        Ok(true)
    }

    /// Record the raw value typed for one of the operation's own arguments.
    pub fn set_argument(&mut self, argument_name: &str, raw_value: &str) -> Result<()> {
        let operation = self.operation_mut()?;
        if operation.field.arg(argument_name).is_none() {
            return Err(ExplorerError::UnknownArgument {
                argument_name: argument_name.to_string(),
                field_name: operation.field.name().to_string(),
            });
        }
        operation.arguments.insert(argument_name.to_string(), raw_value.to_string());
        Ok(())
    }

    /// Record the raw value typed for an argument of a checked field.
    pub fn set_subfield_argument(
        &mut self,
        field_name: &str,
        argument_name: &str,
        raw_value: &str,
    ) -> Result<()> {
        let field = self.return_field(field_name)?;
        if field.arg(argument_name).is_none() {
            return Err(ExplorerError::UnknownArgument {
                argument_name: argument_name.to_string(),
                field_name: field_name.to_string(),
            });
        }
        self.checked_selection_mut(field_name)?
            .set_argument(argument_name, raw_value);
        Ok(())
    }

    /// Check or uncheck one node sub-field of a checked connection field.
    /// Returns whether the sub-field is checked afterwards.
    pub fn set_connection_subfield(
        &mut self,
        field_name: &str,
        subfield_name: &str,
    ) -> Result<bool> {
        let field = self.return_field(field_name)?;
        if self.classify(field) != FieldClass::Connection {
            return Err(ExplorerError::NotAConnection {
                field_name: field_name.to_string(),
            });
        }
        let offered = self.connection_subfields(field);
        if !offered.iter().any(|subfield| subfield.name() == subfield_name) {
            return Err(ExplorerError::UnknownField {
                field_name: subfield_name.to_string(),
                type_name: format!("{field_name}.edges.node"),
            });
        }
        Ok(self.checked_selection_mut(field_name)?.toggle_subfield(subfield_name))
    }

    /// Build the document for the active operation as it currently stands.
    pub fn preview_query(&self) -> Result<BuiltOperation> {
        let operation = self.operation.as_ref().ok_or(ExplorerError::NoOperationSelected)?;
        let synthesizer =
            SelectionSetSynthesizer::with_config(self.catalog, self.config.synthesizer);
        let selection_set =
            synthesizer.synthesize(operation.field.type_ref(), &operation.selections);

        Ok(QueryDocumentBuilder::new(self.catalog)
            .with_shape(self.config.shape)
            .build(
                operation.kind,
                operation.field,
                &operation.arguments,
                &selection_set,
            ))
    }

    /// Send the active operation to `endpoint` and return its `data`.
    ///
    /// The outcome, success or failure, also replaces
    /// [`last_result`](ExplorerSession::last_result).
    pub async fn execute<T: GraphQLTransport>(
        &mut self,
        transport: &T,
        endpoint: &str,
    ) -> Result<serde_json::Value> {
        let built = self.preview_query()?;
        log::debug!("Executing against `{endpoint}`: {built}");
        let result =
            match transport.send(endpoint, &built.to_request()).await {
                Ok(response) => response.into_data(),
                Err(e) => Err(ExplorerError::Transport(e)),
            };
        if let Err(e) = &result {
            log::debug!("Execution failed: {e}");
        }
        self.last_result = Some(result.clone());
        result
    }

    fn new_selection(&self, field: &Field) -> Selection {
        let selection = Selection::new(field.name());
        if self.config.default_connection_subfields == 0
            || self.classify(field) != FieldClass::Connection {
            return selection;
        }
        selection.with_subfields(
            self.connection_subfields(field)
                .into_iter()
                .take(self.config.default_connection_subfields)
                .map(Field::name),
        )
    }

    fn operation_mut(&mut self) -> Result<&mut ActiveOperation<'catalog>> {
        self.operation.as_mut().ok_or(ExplorerError::NoOperationSelected)
    }

    /// Look up `field_name` on the active operation's return type.
    fn return_field(&self, field_name: &str) -> Result<&'catalog Field> {
        let operation = self.operation.as_ref().ok_or(ExplorerError::NoOperationSelected)?;
        self.catalog
            .field_of(operation.field.type_ref(), field_name)
            .ok_or_else(|| ExplorerError::UnknownField {
                field_name: field_name.to_string(),
                type_name: operation.field.type_ref()
                    .named_type()
                    .unwrap_or_default()
                    .to_string(),
            })
    }

    fn checked_selection_mut(&mut self, field_name: &str) -> Result<&mut Selection> {
        self.operation_mut()?
            .selections
            .get_mut(field_name)
            .ok_or_else(|| ExplorerError::FieldNotSelected {
                field_name: field_name.to_string(),
            })
    }
}
