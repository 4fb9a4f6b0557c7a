pub mod bump_event;
pub mod community;

#[cfg(test)]
mod test;
