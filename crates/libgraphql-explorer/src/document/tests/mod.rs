mod query_document_builder_tests;
