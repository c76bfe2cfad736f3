/// WGSL shader for the instanced diorama meshes: Lambert diffuse from one
/// directional light plus up to 8 point lights, scene ambient, linear fog.
pub const DIORAMA_SHADER: &str = r#"
struct PointLight {
    position: vec3<f32>,
    range: f32,
    color: vec3<f32>,
    intensity: f32,
};

struct Uniforms {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
    // rgb = color, a = intensity
    ambient: vec4<f32>,
    // xyz = direction light travels in
    dir_direction: vec4<f32>,
    // rgb = color, a = intensity
    dir_color: vec4<f32>,
    fog_color: vec4<f32>,
    // x = fog near, y = fog far, z = point light count
    fog_params: vec4<f32>,
    points: array<PointLight, 8>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) color: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    let world_pos = model * vec4<f32>(vertex.position, 1.0);
    let world_normal = (model * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.world_pos = world_pos.xyz;
    out.world_normal = world_normal;
    out.color = instance.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput, @builtin(front_facing) front_facing: bool) -> @location(0) vec4<f32> {
    var n = normalize(in.world_normal);
    if (!front_facing) {
        n = -n;
    }

    var lighting = uniforms.ambient.rgb * uniforms.ambient.a;

    let nd = max(dot(n, -uniforms.dir_direction.xyz), 0.0);
    lighting += uniforms.dir_color.rgb * uniforms.dir_color.a * nd;

    let count = u32(uniforms.fog_params.z);
    for (var i = 0u; i < count; i = i + 1u) {
        let light = uniforms.points[i];
        let to_light = light.position - in.world_pos;
        let dist = length(to_light);
        if (dist < light.range) {
            let l = to_light / dist;
            let falloff = 1.0 - dist / light.range;
            let atten = falloff * falloff;
            lighting += light.color * light.intensity * max(dot(n, l), 0.0) * atten;
        }
    }

    var rgb = in.color.rgb * lighting;

    let view_dist = length(uniforms.camera_pos.xyz - in.world_pos);
    let fog = clamp(
        (view_dist - uniforms.fog_params.x) / (uniforms.fog_params.y - uniforms.fog_params.x),
        0.0,
        1.0,
    );
    rgb = mix(rgb, uniforms.fog_color.rgb, fog);

    return vec4<f32>(rgb, in.color.a);
}
"#;
