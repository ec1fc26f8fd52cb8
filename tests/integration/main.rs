//! Integration tests for the book shop API

mod api_tests;
mod routes;
