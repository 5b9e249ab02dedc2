mod common;



#[cfg(test)]
mod test_catch;
