// @generated by AtriusCodeGen
// DO NOT EDIT MANUALLY

#![allow(clippy::upper_case_acronyms)]

use crate::{BoundCode, Vocabulary};

/// FHIR CodeSystem: BundleType
/// Canonical URL: http://hl7.org/fhir/bundle-type
/// Title: BundleType
/// Indicates the purpose of a bundle - how it is intended to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
#[vocabulary(name = "BundleType", system = "http://hl7.org/fhir/bundle-type")]
pub enum BundleType {
    /// Display: Document
    /// Definition: The bundle is a document. The first resource is a Composition.
    #[code("document")]
    Document,
    /// Display: Message
    /// Definition: The bundle is a message. The first resource is a MessageHeader.
    #[code("message")]
    Message,
    /// Display: Transaction
    /// Definition: The bundle is a transaction - intended to be processed by a server as an atomic commit.
    #[code("transaction")]
    Transaction,
    /// Display: Transaction Response
    /// Definition: The bundle is a transaction response. Because the response is a transaction response, the transaction has succeeded, and all responses are error free.
    #[code("transaction-response")]
    TransactionResponse,
    /// Display: Batch
    /// Definition: The bundle is a set of actions - intended to be processed by a server as a group of independent actions.
    #[code("batch")]
    Batch,
    /// Display: Batch Response
    /// Definition: The bundle is a batch response. Note that as a batch, some responses may indicate failure and others success.
    #[code("batch-response")]
    BatchResponse,
    /// Display: History List
    /// Definition: The bundle is a list of resources from a history interaction on a server.
    #[code("history")]
    History,
    /// Display: Search Results
    /// Definition: The bundle is a list of resources returned as a result of a search/query interaction, operation, or message.
    #[code("searchset")]
    Searchset,
    /// Display: Collection
    /// Definition: The bundle is a set of resources collected into a single package for ease of distribution that imposes no processing obligations or behavioral rules beyond persistence.
    #[code("collection")]
    Collection,
}
/// [`BoundCode`] restricted to [`BundleType`].
pub type BundleTypeCode = BoundCode<BundleType>;
