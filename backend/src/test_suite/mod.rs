pub mod buffer;
pub mod dot;

#[macro_export]
macro_rules! backend_test_suite {
    (
        mod $modname:ident,
        backend = $backend:ty,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            use $crate::{api::ModuleNew, layouts::Module};

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    let module: Module<$backend> = Module::<$backend>::new();
                    ($impl)(&module);
                }
            )+
        }
    };
}

#[macro_export]
macro_rules! cross_backend_test_suite {
    (
        mod $modname:ident,
        backend_ref = $backend_ref:ty,
        backend_test = $backend_test:ty,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            use $crate::{api::ModuleNew, layouts::Module};

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    let module_ref: Module<$backend_ref> = Module::<$backend_ref>::new();
                    let module_test: Module<$backend_test> = Module::<$backend_test>::new();
                    ($impl)(&module_ref, &module_test);
                }
            )+
        }
    };
}
