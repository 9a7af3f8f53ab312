extern crate failure;
extern crate gl;
extern crate opengl_lessons;
extern crate sdl2;

use failure::err_msg;
use opengl_lessons::debug;
use opengl_lessons::render_gl;
use std::ffi::CString;

const VERTEX_SOURCE: &'static str = "#version 330 core

layout (location = 0) in vec4 pos;

void main()
{
    gl_Position = pos;
}";

const FRAGMENT_SOURCE: &'static str = "#version 330 core

layout (location = 0) out vec4 color;

void main()
{
    color = vec4(1.0, 1.0, 0.0, 1.0);
}";

fn main() {
    if let Err(e) = run() {
        println!("{}", debug::failure_to_string(e));
        std::process::exit(1);
    }
}

fn run() -> Result<(), failure::Error> {
    let sdl = sdl2::init().map_err(err_msg)?;
    let video_subsystem = sdl.video().map_err(err_msg)?;

    // This one draws straight from a bound buffer, with no vertex array
    // object; only the compatibility profile's default vertex array allows
    // that.
    let gl_attr = video_subsystem.gl_attr();
    gl_attr.set_context_profile(sdl2::video::GLProfile::Compatibility);

    let window = video_subsystem
        .window("Hello World", 640, 480)
        .opengl()
        .resizable()
        .build()?;

    let _gl_context = window.gl_create_context().map_err(err_msg)?;
    let gl = gl::Gl::load_with(|s| {
        video_subsystem.gl_get_proc_address(s) as *const std::os::raw::c_void
    });

    let positions = triangle_positions();

    let vbo = render_gl::VertexBuffer::new(&gl);
    vbo.bind();
    vbo.static_draw_data(&positions);

    unsafe {
        gl.EnableVertexAttribArray(0);
        gl.VertexAttribPointer(
            0,
            2,
            gl::FLOAT,
            gl::FALSE,
            (2 * std::mem::size_of::<f32>()) as gl::types::GLint,
            std::ptr::null(),
        );
    }

    let vert_shader = render_gl::Shader::from_vert_source(&gl, &CString::new(VERTEX_SOURCE)?)?;
    let frag_shader = render_gl::Shader::from_frag_source(&gl, &CString::new(FRAGMENT_SOURCE)?)?;
    let shader_program = render_gl::Program::from_shaders(&gl, &[vert_shader, frag_shader])?;
    shader_program.set_used();

    let mut event_pump = sdl.event_pump().map_err(err_msg)?;
    'main: loop {
        for event in event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'main,
                _ => {}
            }
        }

        unsafe {
            gl.Clear(gl::COLOR_BUFFER_BIT);
            gl.DrawArrays(gl::TRIANGLES, 0, 3);
        }

        window.gl_swap_window();
    }

    Ok(())
}

fn triangle_positions() -> Vec<f32> {
    vec![
        -0.5, -0.5,
         0.5, -0.5,
         0.0,  0.5,
    ]
}

#[cfg(test)]
mod tests {
    use super::triangle_positions;

    #[test]
    fn positions_mirror_about_the_y_axis_with_apex_on_it() {
        let p = triangle_positions();
        assert_eq!(p.len(), 6);

        assert_eq!(p[0], -p[2]);
        assert_eq!(p[1], p[3]);
        assert_eq!(p[4], 0.0);
        assert!(p[5] > 0.0);
    }
}
