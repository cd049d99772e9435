use crate::{
    components::{GlobalTransform, LocalTransform},
    rig::CameraRig,
};
use hecs::World;

/// Update global transform system
/// Walks through each LocalTransform and applies it to the entity's GlobalTransform
pub fn update_global_transform_system(rig: &mut CameraRig) {
    update_global_transform_system_inner(&mut rig.world);
}

pub(crate) fn update_global_transform_system_inner(world: &mut World) {
    for (_, (local_transform, global_transform)) in
        world.query_mut::<(&LocalTransform, &mut GlobalTransform)>()
    {
        *global_transform = (*local_transform).into();
    }
}
