mod bump_event;
mod community;
