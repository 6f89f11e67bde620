use crate::layouts::{Backend, Module};

pub trait ModuleNew<B: Backend> {
    fn new() -> Module<B>;
}
