//! Collection variable validation: the value must be one of the permitted
//! values of the referenced item collection, widened by inherited parents
//! and collapsed by a final value.

use std::collections::BTreeSet;

use metaform_data::DataElement;
use metaform_metadata::{
    CollectionVariable, CollectionVariableChild, ElementKind, MetadataElement, MetadataHolder,
};

use crate::error::ValidatorError;
use crate::report::ValidationReport;

/// Validates an atomic value against a [`CollectionVariable`] definition,
/// optionally scoped under an extra parent variable when built from a
/// [`CollectionVariableChild`].
pub struct DataCollectionVariableValidator<'a> {
    holder: &'a MetadataHolder,
    variable: &'a CollectionVariable,
    scoped_parent_id: Option<&'a str>,
}

impl<'a> DataCollectionVariableValidator<'a> {
    pub(crate) fn new(holder: &'a MetadataHolder, variable: &'a CollectionVariable) -> Self {
        Self {
            holder,
            variable,
            scoped_parent_id: None,
        }
    }

    pub(crate) fn new_child(
        holder: &'a MetadataHolder,
        child: &'a CollectionVariableChild,
    ) -> Self {
        Self {
            holder,
            variable: &child.variable,
            scoped_parent_id: Some(&child.ref_parent_id),
        }
    }

    pub(crate) fn validate(&self, data: &DataElement) -> Result<ValidationReport, ValidatorError> {
        let atomic = data
            .as_atomic()
            .ok_or_else(|| ValidatorError::WrongDataKind {
                id: self.variable.id.clone(),
                expected: "atomic",
            })?;

        let permitted = self.permitted_values()?;

        let mut report = ValidationReport::new();
        if !permitted.contains(&atomic.value) {
            report.add_error(format!(
                "Data value:{} is not a valid value for collectionVariable with nameInData:{}",
                atomic.value, self.variable.name_in_data
            ));
        }
        Ok(report)
    }

    /// The full permitted value set: own items plus everything inherited
    /// through the parent chain. A final value collapses the set of the
    /// variable that declares it.
    fn permitted_values(&self) -> Result<BTreeSet<String>, ValidatorError> {
        let mut permitted = BTreeSet::new();
        // A final value wins over everything, including values the scoped
        // parent would otherwise contribute.
        if let Some(final_value) = &self.variable.final_value {
            permitted.insert(final_value.clone());
            return Ok(permitted);
        }
        let mut visited = BTreeSet::new();
        self.collect(self.variable, &mut visited, &mut permitted)?;
        if let Some(parent_id) = self.scoped_parent_id {
            self.collect_by_id(parent_id, &mut visited, &mut permitted)?;
        }
        Ok(permitted)
    }

    fn collect(
        &self,
        variable: &CollectionVariable,
        visited: &mut BTreeSet<String>,
        permitted: &mut BTreeSet<String>,
    ) -> Result<(), ValidatorError> {
        if !visited.insert(variable.id.clone()) {
            return Err(ValidatorError::InheritanceCycle {
                id: variable.id.clone(),
            });
        }

        if let Some(final_value) = &variable.final_value {
            permitted.insert(final_value.clone());
            return Ok(());
        }

        let collection = match self.holder.get_element(&variable.item_collection_id) {
            Some(MetadataElement::ItemCollection(collection)) => collection,
            Some(other) => {
                return Err(ValidatorError::UnexpectedKind {
                    id: variable.item_collection_id.clone(),
                    expected: ElementKind::ItemCollection,
                    found: other.kind(),
                })
            }
            None => {
                return Err(ValidatorError::MissingElement {
                    id: variable.item_collection_id.clone(),
                })
            }
        };

        for item_id in &collection.item_references {
            match self.holder.get_element(item_id) {
                Some(MetadataElement::CollectionItem(item)) => {
                    permitted.insert(item.name_in_data.clone());
                }
                Some(other) => {
                    return Err(ValidatorError::UnexpectedKind {
                        id: item_id.clone(),
                        expected: ElementKind::CollectionItem,
                        found: other.kind(),
                    })
                }
                None => {
                    return Err(ValidatorError::MissingElement {
                        id: item_id.clone(),
                    })
                }
            }
        }

        if let Some(parent_id) = &variable.ref_parent_id {
            self.collect_by_id(parent_id, visited, permitted)?;
        }
        Ok(())
    }

    fn collect_by_id(
        &self,
        parent_id: &str,
        visited: &mut BTreeSet<String>,
        permitted: &mut BTreeSet<String>,
    ) -> Result<(), ValidatorError> {
        match self.holder.get_element(parent_id) {
            Some(MetadataElement::CollectionVariable(variable)) => {
                self.collect(variable, visited, permitted)
            }
            Some(MetadataElement::CollectionVariableChild(child)) => {
                self.collect(&child.variable, visited, permitted)?;
                self.collect_by_id(&child.ref_parent_id, visited, permitted)
            }
            Some(other) => Err(ValidatorError::UnexpectedKind {
                id: parent_id.to_string(),
                expected: ElementKind::CollectionVariable,
                found: other.kind(),
            }),
            None => Err(ValidatorError::MissingElement {
                id: parent_id.to_string(),
            }),
        }
    }
}
