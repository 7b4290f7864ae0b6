mod auth;
mod department;
mod employee;
mod leave;
mod performance;
