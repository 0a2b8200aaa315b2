mod common;

mod validator;
mod verdict;
