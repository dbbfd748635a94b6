mod test_redact;
mod test_retry;
