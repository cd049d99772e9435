use crate::{
    components::{GlobalTransform, LocalTransform, Parent},
    rig::CameraRig,
};
use hecs::World;

/// Update global transform with parent transform system
/// Walks through each entity that has a Parent and composes its LocalTransform with those of
/// its ancestors, so that moving an eye node moves every camera parented to it.
///
/// Must run after `update_global_transform_system`, which settles the roots.
pub fn update_global_transform_with_parent_system(rig: &mut CameraRig) {
    update_global_transform_with_parent_system_inner(&mut rig.world);
}

pub(crate) fn update_global_transform_with_parent_system_inner(world: &mut World) {
    // Random access into every entity that has a parent, used to walk up the hierarchy.
    let mut ancestors = world.query::<(&Parent, &LocalTransform)>();
    let ancestors = ancestors.view();

    // Entities without parents, ie. the roots of the hierarchy.
    let mut roots = world.query::<&GlobalTransform>().without::<&Parent>();
    let roots = roots.view();

    // `roots` excludes everything with a `Parent`, so it never aliases the mutable
    // `GlobalTransform`s borrowed here.
    for (_entity, (parent, local_transform, absolute)) in world
        .query::<(&Parent, &LocalTransform, &mut GlobalTransform)>()
        .iter()
    {
        let mut relative = local_transform.to_affine();
        let mut ancestor = parent.0;
        while let Some((next, next_local)) = ancestors.get(ancestor) {
            relative = next_local.to_affine() * relative;
            ancestor = next.0;
        }
        // The loop stops at the first ancestor without a `Parent`, which is necessarily a root.
        if let Some(root) = roots.get(ancestor) {
            absolute.0 = root.0 * relative;
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::{Affine3A, Quat, Vec3};

    use crate::systems::update_global_transform::update_global_transform_system_inner;

    use super::*;

    fn translated(x: f32, y: f32, z: f32) -> LocalTransform {
        LocalTransform {
            translation: Vec3::new(x, y, z),
            ..Default::default()
        }
    }

    fn tick(world: &mut World) {
        update_global_transform_system_inner(world);
        update_global_transform_with_parent_system_inner(world);
    }

    #[test]
    pub fn test_transform_system() {
        let mut world = World::new();
        let parent = world.spawn((translated(1.0, 1.0, 100.0), GlobalTransform::default()));
        let child = world.spawn((
            translated(1.0, 1.0, 100.0),
            GlobalTransform::default(),
            Parent(parent),
        ));
        let grandchild = world.spawn((
            translated(1.0, 1.0, 100.0),
            GlobalTransform::default(),
            Parent(child),
        ));

        tick(&mut world);

        {
            let global_transform = world.get::<&GlobalTransform>(grandchild).unwrap();
            let expected_matrix = Affine3A::from_translation([3.0, 3.0, 300.0].into());
            assert_relative_eq!(global_transform.0, expected_matrix);
        }

        {
            let global_transform = world.get::<&GlobalTransform>(child).unwrap();
            let expected_matrix = Affine3A::from_translation([2.0, 2.0, 200.0].into());
            assert_relative_eq!(global_transform.0, expected_matrix);
        }
    }

    #[test]
    pub fn test_rotated_parent_moves_child() {
        let mut world = World::new();
        let parent = world.spawn((
            LocalTransform {
                translation: Vec3::new(0.0, 0.0, -5.0),
                rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
                scale: Vec3::ONE,
            },
            GlobalTransform::default(),
        ));
        let child = world.spawn((translated(0.0, 0.0, 1.0), GlobalTransform::default(), Parent(parent)));

        tick(&mut world);

        let global_transform = world.get::<&GlobalTransform>(child).unwrap();
        let (_, _, translation) = global_transform.to_scale_rotation_translation();
        assert_relative_eq!(translation, Vec3::new(1.0, 0.0, -5.0), epsilon = 1e-5);
    }
}
