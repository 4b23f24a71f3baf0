mod constructor;
pub(crate) use constructor::constructor;

mod id;
pub(crate) use id::static_trait_id_impl;

mod trait_impl;
pub(crate) use trait_impl::trait_value_impl;
