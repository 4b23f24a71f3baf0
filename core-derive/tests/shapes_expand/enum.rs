use smithy4rs_core::smithy;
use smithy4rs_core_derive::{SmithyShape, smithy_enum};

smithy!("test#SimpleEnum": {
    enum SIMPLE_ENUM_SCHEMA {
        A = "a"
        B = "b"
        C = "c"
    }
});

#[smithy_enum]
#[derive(SmithyShape, PartialEq, Clone)]
#[smithy_schema(SIMPLE_ENUM_SCHEMA)]
pub enum SimpleEnum {
    #[enum_value("a")]
    A,
    #[enum_value("b")]
    B,
    #[enum_value("c")]
    C,
}
